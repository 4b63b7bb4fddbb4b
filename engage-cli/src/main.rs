use clap::{Args, Parser, Subcommand};
use engage_so::{
    AddUserEvent, Client, Config, CreateUpdateListInput, CreateUserInput, Credentials,
    PaginatorInput, SubscribeListInput,
};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser, Clone)]
#[command(name = "engage")]
#[command(about = "A CLI tool to manage Engage users and lists")]
struct Cli {
    #[arg(short, long, env = "ENGAGE_SO_PUBLIC_KEY", hide_env_values = true)]
    public_key: String,
    #[arg(short = 'k', long, env = "ENGAGE_SO_PRIVATE_KEY", hide_env_values = true)]
    private_key: String,
    #[arg(short, long, env = "ENGAGE_SO_BASE_URL")]
    base_url: Option<String>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand, Clone)]
enum Commands {
    #[command(subcommand, about = "Manage users")]
    Users(UserCommands),
    #[command(subcommand, about = "Manage lists and subscriptions")]
    Lists(ListCommands),
}

#[derive(Debug, Subcommand, Clone)]
enum UserCommands {
    #[command(about = "Creates a user")]
    Create {
        id: String,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        first_name: Option<String>,
        #[arg(long)]
        last_name: Option<String>,
        #[arg(long)]
        number: Option<String>,
    },
    #[command(about = "Shows a user")]
    Get { uid: String },
    #[command(about = "Lists one page of users")]
    List(PageArgs),
    #[command(about = "Records an event for a user")]
    Event {
        uid: String,
        event: String,
        #[arg(long)]
        value: Option<String>,
    },
}

#[derive(Debug, Subcommand, Clone)]
enum ListCommands {
    #[command(about = "Creates a list")]
    Create {
        title: String,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        redirect_url: Option<String>,
        #[arg(long)]
        double_optin: Option<bool>,
    },
    #[command(about = "Shows a list")]
    Get { id: String },
    #[command(about = "Lists one page of lists")]
    All(PageArgs),
    #[command(about = "Archives a list")]
    Archive { id: String },
    #[command(about = "Subscribes a contact to a list")]
    Subscribe {
        id: String,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        number: Option<String>,
    },
    #[command(about = "Removes a subscriber from a list")]
    Unsubscribe { id: String, uid: String },
}

#[derive(Debug, Args, Clone)]
struct PageArgs {
    #[arg(long)]
    limit: Option<u32>,
    #[arg(long, conflicts_with = "prev")]
    next: Option<String>,
    #[arg(long)]
    prev: Option<String>,
}

impl From<PageArgs> for PaginatorInput {
    fn from(args: PageArgs) -> Self {
        PaginatorInput {
            limit: args.limit,
            next_cursor: args.next,
            prev_cursor: args.prev,
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<(), anyhow::Error> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Cli::parse();

    let config = Config::new().with_credentials(Credentials::new(args.public_key, args.private_key));
    let mut client = Client::new(config)?;
    if let Some(base_url) = args.base_url {
        client = client.with_base_url(base_url);
    }

    match args.command {
        Commands::Users(command) => run_users(&client, command).await?,
        Commands::Lists(command) => run_lists(&client, command).await?,
    }

    Ok(())
}

async fn run_users(client: &Client, command: UserCommands) -> Result<(), anyhow::Error> {
    let users = client.users();
    match command {
        UserCommands::Create {
            id,
            email,
            first_name,
            last_name,
            number,
        } => {
            let input = CreateUserInput {
                email,
                first_name,
                last_name,
                number,
                ..CreateUserInput::new(id)
            };
            print_json(&users.create(&input).await?)?;
        }
        UserCommands::Get { uid } => print_json(&users.get(&uid).await?)?,
        UserCommands::List(page) => print_json(&users.list(&page.into()).await?)?,
        UserCommands::Event { uid, event, value } => {
            let mut input = AddUserEvent::new(event);
            if let Some(value) = value {
                input = input.with_value(value);
            }
            users.add_event(&uid, &input).await?;
            println!("Event recorded for user {uid}");
        }
    }
    Ok(())
}

async fn run_lists(client: &Client, command: ListCommands) -> Result<(), anyhow::Error> {
    let lists = client.lists();
    match command {
        ListCommands::Create {
            title,
            description,
            redirect_url,
            double_optin,
        } => {
            let input = CreateUpdateListInput {
                title: Some(title),
                description,
                redirect_url,
                double_opt_in: double_optin,
            };
            print_json(&lists.create_list(&input).await?)?;
        }
        ListCommands::Get { id } => print_json(&lists.get_list(&id).await?)?,
        ListCommands::All(page) => print_json(&lists.get_all_lists(&page.into()).await?)?,
        ListCommands::Archive { id } => {
            lists.archive_list(&id).await?;
            println!("Archived list {id}");
        }
        ListCommands::Subscribe { id, email, number } => {
            let input = SubscribeListInput {
                email,
                number,
                ..Default::default()
            };
            print_json(&lists.subscribe_list(&id, &input).await?)?;
        }
        ListCommands::Unsubscribe { id, uid } => {
            lists.unsubscribe_list(&id, &uid).await?;
            println!("Unsubscribed user {uid} from list {id}");
        }
    }
    Ok(())
}
