use clap::Parser;
use shopping_core::{ShoppingListApi, ShoppingListClient};
use shopping_ui::{mount, UreqTransport};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::task::LocalSet;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Terminal front end for the shopping list.
///
/// Type a line to add it (each `!` raises its priority), `:rm N` to remove
/// the N-th row, `:q` to quit.
#[derive(Parser, Debug)]
#[command(name = "shopping-list", version)]
struct Cli {
    /// Origin of the shopping list server
    #[arg(long, env = "SHOPPING_LIST_URL", default_value = "http://127.0.0.1:3000")]
    url: String,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    LocalSet::new().run_until(run(cli)).await
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    info!(url = %cli.url, "mounting shopping list");
    let api = ShoppingListApi::new(ShoppingListClient::new(&cli.url), UreqTransport::new());
    let mut app = mount(api);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        app.settle().await;
        println!("{}", app.view());

        let Some(line) = lines.next_line().await? else {
            return Ok(());
        };
        let line = line.trim_end_matches(['\r', '\n']);

        if line == ":q" {
            return Ok(());
        }
        if let Some(arg) = line.strip_prefix(":rm ") {
            let rows = app.view().rows;
            match arg.trim().parse::<usize>().ok().and_then(|n| n.checked_sub(1)).and_then(|i| rows.get(i)) {
                Some(item) => app.click(item),
                None => warn!(row = %arg.trim(), "no such row"),
            }
            continue;
        }

        app.input().change(line);
        app.input().submit();
    }
}
