use clap::Parser;
use elec_client::config::cli::{Command, GoodsCommand, OrdersCommand, UserCommand};
use elec_client::utils::logger;
use elec_client::{ApiResponse, CliConfig, HttpTransport, MarketClient, Result};
use serde_json::Value;

fn parse_body(raw: &str) -> Result<Value> {
    Ok(serde_json::from_str(raw)?)
}

async fn dispatch(client: &MarketClient<HttpTransport>, command: &Command) -> Result<ApiResponse> {
    match command {
        Command::Goods(goods) => match goods {
            GoodsCommand::List => client.goods.list_elec().await,
            GoodsCommand::Add { body } => client.goods.add_elec(parse_body(body)?).await,
            GoodsCommand::Update { body } => client.goods.update_elec(parse_body(body)?).await,
            GoodsCommand::Delete { id } => client.goods.delete_elec(id).await,
            GoodsCommand::Search { body } => client.goods.search_elec(parse_body(body)?).await,
            GoodsCommand::Get { body } => client.goods.get_elec(parse_body(body)?).await,
        },
        Command::Orders(orders) => match orders {
            OrdersCommand::List { body } => client.orders.list_order(parse_body(body)?).await,
            OrdersCommand::ByBuyer { body } => {
                client.orders.get_proposal_by_buyer(parse_body(body)?).await
            }
            OrdersCommand::Submit { body } => client.orders.submit_order(parse_body(body)?).await,
            OrdersCommand::Add { body } => client.orders.add_order(parse_body(body)?).await,
            OrdersCommand::Update { body } => client.orders.update_order(parse_body(body)?).await,
            OrdersCommand::Delete { id } => client.orders.delete_order(id).await,
            OrdersCommand::SearchByBuyer { body } => {
                client.orders.search_order_by_buyer(parse_body(body)?).await
            }
            OrdersCommand::Get { body } => client.orders.get_proposal(parse_body(body)?).await,
            OrdersCommand::ByOrderNum { body } => {
                client
                    .orders
                    .get_proposal_by_order_num(parse_body(body)?)
                    .await
            }
        },
        Command::User(user) => match user {
            UserCommand::Wallet { body } => client.user.get_wallet(parse_body(body)?).await,
            UserCommand::SetWallet { body } => client.user.set_wallet(parse_body(body)?).await,
            UserCommand::ConfirmOrder { body } => {
                client.user.confirm_order(parse_body(body)?).await
            }
        },
    }
}

async fn run(cli: &CliConfig) -> Result<ApiResponse> {
    let config = cli.resolve()?;
    let client = MarketClient::from_config(&config)?;
    dispatch(&client, &cli.command).await
}

#[tokio::main]
async fn main() {
    let cli = CliConfig::parse();

    if cli.json {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }
    tracing::debug!("Command: {:?}", cli.command);

    match run(&cli).await {
        Ok(response) => {
            if !response.is_success() {
                tracing::warn!("Backend answered with code {}", response.code);
            }
            match serde_json::to_string_pretty(&response) {
                Ok(rendered) => println!("{}", rendered),
                Err(e) => {
                    eprintln!("❌ {}", e);
                    std::process::exit(1);
                }
            }
        }
        Err(e) => {
            tracing::error!("Request failed: {} (Category: {:?})", e, e.category());
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    }
}
