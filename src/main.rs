use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use serde_json::{json, Value};

use route_directory::config::load_config;
use route_directory::menu::{
    flatten_to_key_list, visible_items, AllowAll, AuthorityCheck, MenuLink, NavKind, NavNode,
    RoleSet, StaticMenu,
};
use route_directory::observability::logging::init_logging;
use route_directory::resolver::{
    LoadStrategy, ModelRegistry, ModuleCatalog, NavigationContext, ViewCatalog, ViewLoader,
};
use route_directory::{MenuState, NavigationConfig, NavigationResolver, RouteTable};

#[derive(Parser)]
#[command(name = "route-directory")]
#[command(about = "Inspect route directory and menu state", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "navigation.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the merged route directory
    Directory,
    /// Print the flattened menu keys
    Keys,
    /// Resolve navigation state and view for a pathname
    Resolve {
        pathname: String,

        /// Render the menu collapsed
        #[arg(long)]
        collapsed: bool,

        /// Roles of the current user (repeatable); unrestricted when absent
        #[arg(long = "role")]
        roles: Vec<String>,
    },
}

/// Renders every component as a placeholder naming it.
struct PlaceholderViews;

impl ViewCatalog<String> for PlaceholderViews {
    fn loader(&self, component: &str, strategy: LoadStrategy) -> Option<ViewLoader<String>> {
        let view = format!("<{component} />");
        Some(match strategy {
            LoadStrategy::Eager => ViewLoader::eager(move || view.clone()),
            LoadStrategy::Deferred => ViewLoader::deferred(move || {
                let view = view.clone();
                async move {
                    tokio::task::yield_now().await;
                    Ok(view)
                }
            }),
        })
    }
}

type Context = NavigationContext<String>;

fn context(config: &NavigationConfig) -> Result<Arc<Context>, Box<dyn std::error::Error>> {
    let routes = RouteTable::from_config(&config.routes, &PlaceholderViews)?;
    let context = NavigationContext::new(
        routes,
        Arc::new(StaticMenu(config.menu.clone())),
        Arc::new(ModelRegistry::new()),
        Arc::new(ModuleCatalog::new(config.models.clone())),
    )
    .with_loading_indicator(config.loading.clone());
    Ok(Arc::new(context))
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = load_config(&cli.config)?;
    init_logging(&config.observability)?;

    tracing::info!(
        config = %cli.config.display(),
        routes = config.routes.len(),
        "route-directory v0.1.0 starting"
    );

    match cli.command {
        Commands::Directory => {
            let directory = context(&config)?.directory().await?;
            let entries: Vec<Value> = directory
                .iter()
                .map(|(template, entry)| {
                    json!({
                        "template": template,
                        "name": entry.name,
                        "authority": entry.authority,
                        "hide_in_breadcrumb": entry.hide_in_breadcrumb,
                        "strategy": entry.view.strategy(),
                        "dependencies": entry.dependencies,
                    })
                })
                .collect();
            print_json(&Value::Array(entries))?;
        }
        Commands::Keys => {
            for key in flatten_to_key_list(&config.menu) {
                println!("{key}");
            }
        }
        Commands::Resolve {
            pathname,
            collapsed,
            roles,
        } => resolve(&config, &pathname, collapsed, roles).await?,
    }

    Ok(())
}

async fn resolve(
    config: &NavigationConfig,
    pathname: &str,
    collapsed: bool,
    roles: Vec<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    let resolver = Arc::new(NavigationResolver::from_menu(&config.menu)?);
    let mut menu = MenuState::new(resolver, pathname);
    menu.set_collapsed(collapsed);

    let check: Box<dyn AuthorityCheck> = if roles.is_empty() {
        Box::new(AllowAll)
    } else {
        Box::new(RoleSet::new(roles))
    };

    let context = context(config)?;
    let directory = context.directory().await?;
    let matched = directory.lookup(pathname).map(|(template, _)| template.to_string());

    let view = match matched.as_deref().and_then(|template| context.route(template)) {
        Some(route) => {
            let state = route.resolve()?;
            if let Some(indicator) = state.indicator() {
                tracing::debug!(class_name = %indicator.class_name, "View loading");
            }
            Some(state.settle().await?.view)
        }
        None => None,
    };

    print_json(&json!({
        "pathname": pathname,
        "menu": menu.props(),
        "route": matched,
        "view": view,
        "breadcrumbs": directory
            .breadcrumbs(pathname)
            .into_iter()
            .map(|crumb| {
                json!({
                    "path": crumb.path,
                    "template": crumb.template,
                    "name": crumb.name,
                })
            })
            .collect::<Vec<_>>(),
        "visible": visible_items(&config.menu, check.as_ref())
            .iter()
            .map(node_json)
            .collect::<Vec<_>>(),
    }))
}

fn node_json(node: &NavNode) -> Value {
    match &node.kind {
        NavKind::Submenu { children } => json!({
            "key": node.key,
            "label": node.label,
            "children": children.iter().map(node_json).collect::<Vec<_>>(),
        }),
        NavKind::Item { link, target } => {
            let (kind, href) = match link {
                MenuLink::External(url) => ("external", url),
                MenuLink::Internal(path) => ("internal", path),
            };
            json!({
                "key": node.key,
                "label": node.label,
                "link": kind,
                "href": href,
                "target": target,
            })
        }
    }
}

fn print_json(value: &Value) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
