use clap::Parser;
use log::LevelFilter;
use newsroom::application::{
    accounts, init::init, news_desk, schedule_desk, ConfigService, NewsRevision,
    ScheduleRevision,
};
use newsroom::cli::{self, Cli, Commands, Credentials, NewsCommand, ScheduleCommand};
use newsroom::domain::{format_timestamp, Editor};
use newsroom::error::{NewsroomError, Result};
use newsroom::infrastructure::{FileSystemRepository, NewsroomRepository, NewsroomSession};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

/// Logs go to stderr so tables on stdout stay clean. RUST_LOG applies on top.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Init { path } => {
            let config = init(&path)?;
            println!("Initialized newsroom at {}", path.display());
            println!("Categories: {}", config.categories.join(", "));
            Ok(())
        }
        Commands::Config { key, value, list } => {
            let repo = FileSystemRepository::discover()?;
            let service = ConfigService::new(repo);

            if list {
                let config = service.list()?;
                println!("editors_file = {}", config.editors_file);
                println!("news_file = {}", config.news_file);
                println!("schedules_file = {}", config.schedules_file);
                println!("categories = {}", config.categories.join(", "));
                println!("created = {}", config.created.to_rfc3339());
                Ok(())
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                } else {
                    println!("{}", service.get(&k)?);
                }
                Ok(())
            } else {
                println!("Usage: newsroom config [--list | <key> [<value>]]");
                println!("Valid keys: editors_file, news_file, schedules_file, categories, created");
                Ok(())
            }
        }
        command => {
            let repo = FileSystemRepository::discover()?;
            let mut session = NewsroomSession::open(&repo)?;
            let outcome = dispatch(command, &repo, &mut session);
            session.commit()?;
            outcome
        }
    }
}

fn signed_in(
    session: &NewsroomSession<'_, FileSystemRepository>,
    credentials: &Credentials,
) -> Result<Editor> {
    accounts::sign_in(&session.editors, &credentials.name, &credentials.email)
}

fn dispatch(
    command: Commands,
    repo: &FileSystemRepository,
    session: &mut NewsroomSession<'_, FileSystemRepository>,
) -> Result<()> {
    match command {
        Commands::Signup {
            name,
            phone,
            email,
            department,
        } => {
            let editor = Editor::new(name, phone, email, department);
            let added = accounts::sign_up(&mut session.editors, editor);
            println!(
                "Sign-up successful! Welcome, {} of {} department.",
                added.name, added.department
            );
        }
        Commands::Signin { credentials } => {
            let editor = signed_in(session, &credentials)?;
            println!(
                "It's good to see you again {} of {} department!",
                editor.name, editor.department
            );
        }
        Commands::Editors => {
            print!("{}", cli::format_editor_list(session.editors.list()));
        }
        Commands::News(news_command) => run_news(news_command, repo, session)?,
        Commands::Schedule(schedule_command) => run_schedule(schedule_command, session)?,
        Commands::Init { .. } | Commands::Config { .. } => {
            return Err(NewsroomError::Config(
                "init and config do not open a newsroom session".to_string(),
            ));
        }
    }
    Ok(())
}

fn run_news(
    command: NewsCommand,
    repo: &FileSystemRepository,
    session: &mut NewsroomSession<'_, FileSystemRepository>,
) -> Result<()> {
    match command {
        NewsCommand::List { category: None } => {
            println!("Current News List:");
            print!("{}", cli::format_news_table(session.news.iter()));
        }
        NewsCommand::List {
            category: Some(category),
        } => {
            let items = news_desk::browse(&session.news, &category);
            print!("{}", cli::format_category_view(&category, &items));
        }
        NewsCommand::Show { title } => {
            let item = news_desk::lookup(&session.news, &title)?;
            let author = session.editors.resolve(&item.editor);
            print!("{}", cli::format_news_detail(item, author));
        }
        NewsCommand::Categories => {
            let config = repo.load_config()?;
            let counts = news_desk::category_counts(&session.news, &config.categories);
            print!("{}", cli::format_category_counts(&counts));
        }
        NewsCommand::Add {
            credentials,
            title,
            summary,
            time,
        } => {
            let editor = signed_in(session, &credentials)?;
            let item = news_desk::publish(&mut session.news, &editor, &title, &summary, &time)?;
            println!("NEWS ADDED SUCCESSFULLY! Filed under {}.", item.category.name);
        }
        NewsCommand::Edit {
            credentials,
            title,
            new_title,
            summary,
            time,
        } => {
            let editor = signed_in(session, &credentials)?;
            let revision = NewsRevision {
                title: new_title,
                summary,
                broadcast_time: time,
            };
            if revision.is_empty() {
                println!("Nothing to change. Use --new-title, --summary or --time.");
                return Ok(());
            }
            let item = news_desk::revise(&mut session.news, &editor, &title, revision)?;
            println!("News '{}' updated.", item.title);
        }
        NewsCommand::Delete { credentials, title } => {
            let editor = signed_in(session, &credentials)?;
            news_desk::retract(&mut session.news, &editor, &title)?;
            println!("News deleted.");
        }
    }
    Ok(())
}

fn run_schedule(
    command: ScheduleCommand,
    session: &mut NewsroomSession<'_, FileSystemRepository>,
) -> Result<()> {
    match command {
        ScheduleCommand::List => {
            println!("Current Schedules:");
            print!("{}", cli::format_schedule_table(session.schedules.list()));
        }
        ScheduleCommand::Add {
            credentials,
            time,
            content,
        } => {
            let editor = signed_in(session, &credentials)?;
            let entry = schedule_desk::book(&mut session.schedules, &editor, &time, &content)?;
            println!("Schedule added for {}.", format_timestamp(&entry.time));
        }
        ScheduleCommand::Edit {
            credentials,
            time,
            new_time,
            content,
        } => {
            let editor = signed_in(session, &credentials)?;
            let revision = ScheduleRevision {
                time: new_time,
                content,
            };
            if revision.is_empty() {
                println!("Nothing to change. Use --new-time or --content.");
                return Ok(());
            }
            let entry =
                schedule_desk::reschedule(&mut session.schedules, &editor, &time, revision)?;
            println!(
                "Schedule updated: {} {}",
                format_timestamp(&entry.time),
                entry.content
            );
        }
        ScheduleCommand::Delete { credentials, time } => {
            let editor = signed_in(session, &credentials)?;
            schedule_desk::cancel(&mut session.schedules, &editor, &time)?;
            println!("The schedule has been successfully deleted.");
        }
    }
    Ok(())
}
