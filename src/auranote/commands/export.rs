use crate::commands::{CmdMessage, CmdResult};
use crate::error::{NoteError, Result};
use crate::model::TabId;
use crate::shell::{sanitize_filename, write_markdown_file};
use crate::workspace::Workspace;
use chrono::Utc;
use flate2::write::GzEncoder;
use flate2::Compression;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Exports one tab as a markdown file in `dir`.
pub fn tab(ws: &Workspace, id: TabId, dir: &Path) -> Result<CmdResult> {
    let tab = ws.tab(id).ok_or(NoteError::TabNotFound(id))?;
    let path = write_markdown_file(dir, &tab.title, &tab.content)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Exported to {}",
        path.display()
    )));
    result.exported_paths.push(path);
    Ok(result)
}

/// Exports every tab into one `.tar.gz` archive in `dir`, grouping
/// folder members under their folder's name.
pub fn archive(ws: &Workspace, dir: &Path) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    if ws.tabs.is_empty() {
        result.add_message(CmdMessage::info("No tabs to export."));
        return Ok(result);
    }

    let filename = format!("auranote-{}.tar.gz", Utc::now().format("%Y-%m-%d_%H-%M-%S"));
    let path = dir.join(&filename);
    let file = File::create(&path).map_err(NoteError::Io)?;
    write_archive(file, ws)?;

    result.add_message(CmdMessage::success(format!(
        "Exported {} tabs to {}",
        ws.tabs.len(),
        path.display()
    )));
    result.exported_paths.push(path);
    Ok(result)
}

fn write_archive<W: Write>(writer: W, ws: &Workspace) -> Result<()> {
    let enc = GzEncoder::new(writer, Compression::default());
    let mut tar = tar::Builder::new(enc);

    for tab in &ws.tabs {
        let short_id = tab.id.to_string().chars().take(8).collect::<String>();
        let entry_name = match tab.folder_id.and_then(|fid| ws.folder(fid)) {
            Some(folder) => format!(
                "auranote/{}/{}-{}.md",
                sanitize_filename(&folder.title),
                sanitize_filename(&tab.title),
                short_id
            ),
            None => format!(
                "auranote/{}-{}.md",
                sanitize_filename(&tab.title),
                short_id
            ),
        };

        let mut header = tar::Header::new_gnu();
        header.set_size(tab.content.len() as u64);
        header.set_mode(0o644);
        header.set_cksum();

        tar.append_data(&mut header, entry_name, tab.content.as_bytes())
            .map_err(NoteError::Io)?;
    }

    tar.finish().map_err(NoteError::Io)?;
    Ok(())
}
