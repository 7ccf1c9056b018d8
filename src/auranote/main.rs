use auranote::api::{NotebookApi, ReorderTarget};
use auranote::commands::{CmdMessage, CmdResult, Direction, Disposition, MessageLevel};
use auranote::display::{DisplayRef, TreeEntry, TreeItem};
use auranote::editor::edit_markdown;
use auranote::error::{NoteError, Result};
use auranote::model::TabId;
use auranote::prefs::Preferences;
use auranote::store::fs::FileStore;
use chrono::{DateTime, Utc};
use clap::Parser;
use colored::Colorize;
use directories::ProjectDirs;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::str::FromStr;
use timeago::Formatter;
use tracing::Level;
use tracing_subscriber::EnvFilter;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

mod args;
use args::{Cli, Commands, FolderCommands};

const LINE_WIDTH: usize = 100;
const TIME_WIDTH: usize = 14;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: NotebookApi<FileStore>,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let mut ctx = init_context()?;

    match cli.command {
        Some(Commands::New { title }) => handle_new(&mut ctx, title),
        Some(Commands::List) => handle_list(&ctx),
        Some(Commands::View { index, raw }) => handle_view(&mut ctx, index, raw),
        Some(Commands::Edit { index }) => handle_edit(&mut ctx, index),
        Some(Commands::Rename { index, title }) => handle_rename(&mut ctx, index, title),
        Some(Commands::Close { index }) => handle_close(&mut ctx, index),
        Some(Commands::Switch { index }) => handle_switch(&mut ctx, index),
        Some(Commands::Next) => handle_cycle(&mut ctx, Direction::Next),
        Some(Commands::Prev) => handle_cycle(&mut ctx, Direction::Prev),
        Some(Commands::Tidy) => handle_tidy(&mut ctx),
        Some(Commands::Folder(cmd)) => handle_folder(&mut ctx, cmd),
        Some(Commands::Move { tab, folder }) => handle_move(&mut ctx, tab, folder),
        Some(Commands::Reorder {
            index,
            before,
            into,
        }) => handle_reorder(&mut ctx, index, before, into),
        Some(Commands::Import { paths }) => handle_import(&mut ctx, paths),
        Some(Commands::Export { index, all, dir }) => handle_export(&mut ctx, index, all, dir),
        Some(Commands::Config { key, value }) => handle_config(&mut ctx, key, value),
        None => handle_list(&ctx),
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive(format!("auranote={}", level).parse().expect("valid directive")),
        )
        .with_writer(io::stderr)
        .try_init();
}

fn init_context() -> Result<AppContext> {
    let data_dir = match std::env::var_os("AURANOTE_DATA_DIR") {
        Some(dir) => PathBuf::from(dir),
        None => ProjectDirs::from("com", "auranote", "auranote")
            .expect("Could not determine data dir")
            .data_dir()
            .to_path_buf(),
    };

    let store = FileStore::new(data_dir);
    let api = NotebookApi::open(store)?;
    Ok(AppContext { api })
}

fn parse_ref(s: &str) -> Result<DisplayRef> {
    DisplayRef::from_str(s).map_err(NoteError::Api)
}

fn handle_new(ctx: &mut AppContext, title: Vec<String>) -> Result<()> {
    let title = join_words(title);
    let result = ctx.api.create_tab(title)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.list()?;
    let active = ctx.api.workspace().active_id();
    print_tree(&result.entries, active);
    Ok(())
}

fn handle_view(ctx: &mut AppContext, index: Option<String>, raw: bool) -> Result<()> {
    if let Some(idx) = index {
        ctx.api.switch_tab(parse_ref(&idx)?)?;
    }
    let Some(tab) = ctx.api.active_tab() else {
        println!("No tabs.");
        return Ok(());
    };

    println!("{}", tab.title.bold());
    println!("--------------------------------");
    if raw {
        println!("{}", tab.content);
    } else {
        print!("{}", ctx.api.render_active());
    }
    Ok(())
}

fn handle_edit(ctx: &mut AppContext, index: Option<String>) -> Result<()> {
    if let Some(idx) = index {
        ctx.api.switch_tab(parse_ref(&idx)?)?;
    }

    let seeded = ctx.api.begin_raw_edit();
    let edited = edit_markdown(&seeded)?;
    let result = ctx.api.finish_raw_edit(&edited)?;

    print_messages(&result.messages);
    if let Some(tab) = result.affected_tabs.first() {
        println!("{}", format!("Saved: {}", tab.title).green());
    }
    Ok(())
}

fn handle_rename(ctx: &mut AppContext, index: String, title: Vec<String>) -> Result<()> {
    let new_title = title.join(" ");
    let index = parse_ref(&index)?;
    let result = match index {
        DisplayRef::Tab(_) => ctx.api.rename_tab(index, &new_title)?,
        DisplayRef::Folder(_) => ctx.api.rename_folder(index, &new_title)?,
    };
    print_messages(&result.messages);
    Ok(())
}

fn handle_close(ctx: &mut AppContext, index: String) -> Result<()> {
    let result = ctx.api.close_tab(parse_ref(&index)?)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_switch(ctx: &mut AppContext, index: String) -> Result<()> {
    let result = ctx.api.switch_tab(parse_ref(&index)?)?;
    print_active(&result);
    Ok(())
}

fn handle_cycle(ctx: &mut AppContext, direction: Direction) -> Result<()> {
    let result = ctx.api.cycle_tab(direction)?;
    print_active(&result);
    Ok(())
}

fn handle_tidy(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.tidy_active()?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_folder(ctx: &mut AppContext, cmd: FolderCommands) -> Result<()> {
    let result = match cmd {
        FolderCommands::New { name } => ctx.api.create_folder(join_words(name))?,
        FolderCommands::Delete {
            index,
            delete_notes,
            keep_notes,
        } => {
            let index = parse_ref(&index)?;
            let disposition = if delete_notes {
                Disposition::Cascade
            } else if keep_notes {
                Disposition::Orphan
            } else {
                prompt_disposition(ctx, index)?
            };
            ctx.api.delete_folder(index, disposition)?
        }
        FolderCommands::Toggle { index } => ctx.api.toggle_folder(parse_ref(&index)?)?,
    };
    print_messages(&result.messages);
    Ok(())
}

/// The blocking confirmation for folder deletion: cascade or orphan is
/// always an explicit choice, never a silent default.
fn prompt_disposition(ctx: &AppContext, index: DisplayRef) -> Result<Disposition> {
    let ws = ctx.api.workspace();
    let id = auranote::commands::helpers::resolve_folder(ws, index)?;
    let members = ws.tabs_in(id).count();
    if members == 0 {
        return Ok(Disposition::Orphan);
    }

    print!(
        "Folder contains {} note{}. Delete them too? [y/N] ",
        members,
        if members == 1 { "" } else { "s" }
    );
    io::stdout().flush().map_err(NoteError::Io)?;

    let mut answer = String::new();
    io::stdin()
        .lock()
        .read_line(&mut answer)
        .map_err(NoteError::Io)?;

    if answer.trim().eq_ignore_ascii_case("y") {
        Ok(Disposition::Cascade)
    } else {
        Ok(Disposition::Orphan)
    }
}

fn handle_move(ctx: &mut AppContext, tab: String, folder: Option<String>) -> Result<()> {
    let tab = parse_ref(&tab)?;
    let folder = folder.as_deref().map(parse_ref).transpose()?;
    let result = ctx.api.move_tab(tab, folder)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_reorder(
    ctx: &mut AppContext,
    index: String,
    before: Option<String>,
    into: Option<String>,
) -> Result<()> {
    let index = parse_ref(&index)?;
    let result = match index {
        DisplayRef::Tab(_) => {
            let target = if let Some(b) = before {
                ReorderTarget::Before(parse_ref(&b)?)
            } else if let Some(f) = into {
                ReorderTarget::EndOfFolder(parse_ref(&f)?)
            } else {
                ReorderTarget::EndOfRoot
            };
            ctx.api.reorder_tab(index, target)?
        }
        DisplayRef::Folder(_) => {
            let before = before.as_deref().map(parse_ref).transpose()?;
            ctx.api.reorder_folder(index, before)?
        }
    };
    print_messages(&result.messages);
    Ok(())
}

fn handle_import(ctx: &mut AppContext, paths: Vec<PathBuf>) -> Result<()> {
    for path in paths {
        match ctx.api.import_file(&path) {
            Ok(result) => print_messages(&result.messages),
            Err(e) => print_messages(&[CmdMessage::warning(format!(
                "Failed to import {}: {}",
                path.display(),
                e
            ))]),
        }
    }
    Ok(())
}

fn handle_export(
    ctx: &mut AppContext,
    index: Option<String>,
    all: bool,
    dir: Option<PathBuf>,
) -> Result<()> {
    let dir = match dir {
        Some(d) => d,
        None => std::env::current_dir().map_err(NoteError::Io)?,
    };

    let result = if all {
        ctx.api.export_archive(&dir)?
    } else if let Some(idx) = index {
        ctx.api.export_tab(parse_ref(&idx)?, &dir)?
    } else {
        return Err(NoteError::Api(
            "Provide a tab index, or --all for an archive".to_string(),
        ));
    };
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(
    ctx: &mut AppContext,
    key: Option<String>,
    value: Option<String>,
) -> Result<()> {
    match (key, value) {
        (Some(key), Some(value)) => {
            let result = ctx.api.set_preference(&key, &value)?;
            print_messages(&result.messages);
        }
        (Some(key), None) => {
            let prefs = ctx.api.preferences()?;
            println!("{}", prefs.value_of(&key)?);
        }
        _ => {
            let prefs = ctx.api.preferences()?;
            for key in Preferences::keys() {
                println!("{:<18} {}", key, prefs.value_of(key)?);
            }
        }
    }
    Ok(())
}

fn join_words(words: Vec<String>) -> Option<String> {
    if words.is_empty() {
        None
    } else {
        Some(words.join(" "))
    }
}

fn print_active(result: &CmdResult) {
    if let Some(tab) = result.affected_tabs.first() {
        println!("Active tab: {}", tab.title.bold());
    }
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

fn print_tree(entries: &[TreeEntry], active: Option<TabId>) {
    if entries.is_empty() {
        println!("No tabs.");
        return;
    }

    let mut hide_members = false;
    for entry in entries {
        match &entry.item {
            TreeItem::Folder { folder, members } => {
                hide_members = folder.collapsed;
                let marker = if folder.collapsed { "▸" } else { "▾" };
                println!(
                    "  {} {} {} {}",
                    format!("{}.", entry.index).yellow(),
                    marker,
                    folder.title.bold(),
                    format!("({})", members).dimmed()
                );
            }
            TreeItem::Tab { tab, nested } => {
                if *nested && hide_members {
                    continue;
                }
                if !*nested {
                    hide_members = false;
                }
                print_tab_row(&entry.index.to_string(), tab, *nested, active == Some(tab.id));
            }
        }
    }
}

fn print_tab_row(index: &str, tab: &auranote::model::Tab, nested: bool, active: bool) {
    let indent = if nested { "      " } else { "  " };
    let marker = if active { "› " } else { "  " };
    let idx_str = format!("{}. ", index);

    let content_preview: String = tab
        .content
        .chars()
        .take(50)
        .map(|c| if c == '\n' { ' ' } else { c })
        .collect();
    let title_content = if content_preview.is_empty() {
        tab.title.clone()
    } else {
        format!("{} {}", tab.title, content_preview)
    };

    let fixed_width = indent.width() + marker.width() + idx_str.width() + TIME_WIDTH;
    let available = LINE_WIDTH.saturating_sub(fixed_width);
    let title_display = truncate_to_width(&title_content, available);
    let padding = available.saturating_sub(title_display.width());

    let time_colored = format_time_ago(tab.updated_at).dimmed();

    println!(
        "{}{}{}{}{}{}",
        indent,
        marker,
        idx_str,
        title_display,
        " ".repeat(padding),
        time_colored
    );
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let duration = Utc::now().signed_duration_since(timestamp);
    let formatter = Formatter::new();
    let time_str = formatter.convert(duration.to_std().unwrap_or_default());
    format!("{:>width$}", time_str, width = TIME_WIDTH)
}
