//! # Editing Surface
//!
//! Two surface variants sit behind one adapter: [`RichSurface`] runs
//! content through the markdown engine (and can render it for display),
//! while [`PlainSurface`] holds text verbatim. The variant is selected
//! once at startup — if the rich engine fails its capability probe the
//! host degrades to plain text, logged, never fatal, and every operation
//! keeps working.
//!
//! [`EditorHost`] implements the adapter contract the controller relies
//! on:
//!
//! - **Suppression**: a programmatic [`EditorHost::set_content`] arms a
//!   flag so the change notification that replacement itself triggers is
//!   not fed back into a save. Exactly one notification per push is
//!   swallowed.
//! - **Deferred replay**: content pushed before initialization completes
//!   is parked (last write wins) and replayed once the surface is ready,
//!   so an early tab switch is never lost to a slow-initializing surface.
//! - **Raw/rendered toggle**: entering raw mode seeds the raw buffer from
//!   the surface; leaving it pushes the (possibly edited) raw text back
//!   through `set_content`. Exactly one view is authoritative at a time.

use crate::error::{NoteError, Result};
use pulldown_cmark::{Event, HeadingLevel, Options, Parser, Tag, TagEnd};
use tracing::warn;

/// Which presentation of the active tab currently owns the content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    Rendered,
    Raw,
}

/// Re-serializes markdown through the engine, producing its canonical
/// form (normalized bullets, collapsed blank runs, reflowed emphasis).
pub fn normalize_markdown(markdown: &str) -> Result<String> {
    let parser = Parser::new_ext(markdown, engine_options());
    let mut out = String::with_capacity(markdown.len());
    pulldown_cmark_to_cmark::cmark(parser, &mut out)
        .map_err(|e| NoteError::Api(format!("Markdown engine failed: {}", e)))?;
    Ok(out)
}

fn engine_options() -> Options {
    Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TASKLISTS | Options::ENABLE_TABLES
}

/// Markdown-aware surface. Content is kept as the user wrote it — the
/// engine is consulted for rendering and normalization, not storage, so
/// no formatting is lost on a push/pull round trip.
pub struct RichSurface {
    source: String,
}

impl RichSurface {
    /// Probes the markdown engine with a known document. A failure here
    /// means the engine stack is unusable and the caller should fall back
    /// to the plain surface.
    pub fn new() -> Result<Self> {
        let probe = "# probe\n\n- item one\n- item two\n";
        let normalized = normalize_markdown(probe)?;
        if !normalized.contains("probe") {
            return Err(NoteError::Api(
                "Markdown engine returned an unusable rendering".to_string(),
            ));
        }
        Ok(Self {
            source: String::new(),
        })
    }

    fn set_content(&mut self, markdown: &str) {
        self.source = markdown.to_string();
    }

    fn content(&self) -> &str {
        &self.source
    }

    /// Renders the current document as display text: headings underlined,
    /// lists bulleted, code indented, inline markup stripped.
    fn render(&self) -> String {
        render_markdown(&self.source)
    }
}

/// Fallback surface: text in, text out, no markdown structure assumed.
#[derive(Default)]
pub struct PlainSurface {
    text: String,
}

impl PlainSurface {
    pub fn new() -> Self {
        Self::default()
    }

    fn set_content(&mut self, text: &str) {
        self.text = text.to_string();
    }

    fn content(&self) -> &str {
        &self.text
    }
}

pub enum Surface {
    Rich(RichSurface),
    Plain(PlainSurface),
}

impl Surface {
    pub fn set_content(&mut self, markdown: &str) {
        match self {
            Surface::Rich(s) => s.set_content(markdown),
            Surface::Plain(s) => s.set_content(markdown),
        }
    }

    pub fn content(&self) -> &str {
        match self {
            Surface::Rich(s) => s.content(),
            Surface::Plain(s) => s.content(),
        }
    }

    pub fn render(&self) -> String {
        match self {
            Surface::Rich(s) => s.render(),
            Surface::Plain(s) => s.content().to_string(),
        }
    }

    pub fn is_rich(&self) -> bool {
        matches!(self, Surface::Rich(_))
    }
}

enum HostState {
    /// Surface still initializing; at most the last pushed content is
    /// parked for replay.
    Initializing { pending: Option<String> },
    Ready(Surface),
}

pub struct EditorHost {
    state: HostState,
    suppress_next_change: bool,
    mode: ViewMode,
    raw_buffer: String,
}

impl EditorHost {
    /// A host whose surface has not finished initializing yet. Content
    /// pushed in this state is parked and replayed by `complete_init`.
    pub fn deferred() -> Self {
        Self {
            state: HostState::Initializing { pending: None },
            suppress_next_change: false,
            mode: ViewMode::Rendered,
            raw_buffer: String::new(),
        }
    }

    /// Initializes synchronously, falling back to the plain surface when
    /// the rich engine is unavailable.
    pub fn initialize() -> Self {
        let mut host = Self::deferred();
        host.complete_init(RichSurface::new());
        host
    }

    /// Resolves the initialization: install the rich surface, or degrade
    /// to plain text on error. Parked content is replayed either way.
    pub fn complete_init(&mut self, rich: Result<RichSurface>) {
        let pending = match &mut self.state {
            HostState::Initializing { pending } => pending.take(),
            HostState::Ready(_) => return,
        };

        let surface = match rich {
            Ok(s) => Surface::Rich(s),
            Err(e) => {
                warn!(error = %e, "rich surface unavailable, using plain text fallback");
                Surface::Plain(PlainSurface::new())
            }
        };
        self.state = HostState::Ready(surface);

        if let Some(content) = pending {
            self.set_content(&content);
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self.state, HostState::Ready(_))
    }

    pub fn is_rich(&self) -> bool {
        matches!(&self.state, HostState::Ready(s) if s.is_rich())
    }

    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    /// Programmatic replacement of the visible document. The change
    /// notification this triggers will be suppressed; while the surface
    /// is initializing the content is parked instead (last write wins).
    pub fn set_content(&mut self, markdown: &str) {
        match &mut self.state {
            HostState::Initializing { pending } => {
                *pending = Some(markdown.to_string());
            }
            HostState::Ready(surface) => {
                self.suppress_next_change = true;
                surface.set_content(markdown);
                if self.mode == ViewMode::Raw {
                    self.raw_buffer = markdown.to_string();
                }
            }
        }
    }

    /// A change notification from the surface. Returns the content the
    /// controller should persist, or `None` when the notification was the
    /// echo of a programmatic `set_content`.
    pub fn notify_edited(&mut self, markdown: &str) -> Option<String> {
        if self.suppress_next_change {
            self.suppress_next_change = false;
            return None;
        }
        match &mut self.state {
            HostState::Ready(surface) => {
                surface.set_content(markdown);
                Some(markdown.to_string())
            }
            HostState::Initializing { .. } => None,
        }
    }

    /// The surface's current document (or the parked content while
    /// initializing).
    pub fn content(&self) -> &str {
        match &self.state {
            HostState::Ready(surface) => surface.content(),
            HostState::Initializing { pending } => pending.as_deref().unwrap_or(""),
        }
    }

    /// Display text for the rendered view.
    pub fn render(&self) -> String {
        match &self.state {
            HostState::Ready(surface) => surface.render(),
            HostState::Initializing { pending } => pending.clone().unwrap_or_default(),
        }
    }

    /// Switches to the raw view, seeded from the current document.
    pub fn enter_raw(&mut self) -> &str {
        self.raw_buffer = self.content().to_string();
        self.mode = ViewMode::Raw;
        &self.raw_buffer
    }

    /// Switches back to the rendered view, pushing the edited raw text
    /// into the surface. Returns the text for the controller to persist —
    /// the push itself is suppressed so it does not save twice.
    pub fn leave_raw(&mut self, edited: &str) -> String {
        self.mode = ViewMode::Rendered;
        self.set_content(edited);
        self.raw_buffer.clear();
        edited.to_string()
    }
}

impl Default for EditorHost {
    fn default() -> Self {
        Self::initialize()
    }
}

/// Walks the markdown event stream into plain display text.
fn render_markdown(markdown: &str) -> String {
    let parser = Parser::new_ext(markdown, engine_options());
    let mut out = String::new();
    let mut heading_start: Option<usize> = None;
    let mut heading_level = HeadingLevel::H1;
    let mut list_stack: Vec<Option<u64>> = Vec::new();
    let mut in_code_block = false;

    for event in parser {
        match event {
            Event::Start(Tag::Paragraph) => ensure_blank_line(&mut out),
            Event::End(TagEnd::Paragraph) => out.push('\n'),
            Event::Start(Tag::Heading { level, .. }) => {
                ensure_blank_line(&mut out);
                heading_level = level;
                heading_start = Some(out.len());
            }
            Event::End(TagEnd::Heading(_)) => {
                if let Some(start) = heading_start.take() {
                    let width = out[start..].chars().count().max(1);
                    let underline = if heading_level == HeadingLevel::H1 {
                        '='
                    } else {
                        '-'
                    };
                    out.push('\n');
                    out.extend(std::iter::repeat(underline).take(width));
                    out.push('\n');
                }
            }
            Event::Start(Tag::List(start)) => {
                if list_stack.is_empty() {
                    ensure_blank_line(&mut out);
                }
                list_stack.push(start);
            }
            Event::End(TagEnd::List(_)) => {
                list_stack.pop();
            }
            Event::Start(Tag::Item) => {
                let indent = "  ".repeat(list_stack.len().saturating_sub(1));
                match list_stack.last_mut() {
                    Some(Some(n)) => {
                        out.push_str(&format!("{}{}. ", indent, n));
                        *n += 1;
                    }
                    _ => {
                        out.push_str(&indent);
                        out.push_str("• ");
                    }
                }
            }
            Event::End(TagEnd::Item) => {
                if !out.ends_with('\n') {
                    out.push('\n');
                }
            }
            Event::Start(Tag::CodeBlock(_)) => {
                ensure_blank_line(&mut out);
                in_code_block = true;
            }
            Event::End(TagEnd::CodeBlock) => {
                in_code_block = false;
                if !out.ends_with('\n') {
                    out.push('\n');
                }
            }
            Event::Text(text) => {
                if in_code_block {
                    for line in text.lines() {
                        out.push_str("    ");
                        out.push_str(line);
                        out.push('\n');
                    }
                } else {
                    out.push_str(&text);
                }
            }
            Event::Code(code) => {
                out.push_str(&code);
            }
            Event::SoftBreak => out.push('\n'),
            Event::HardBreak => out.push('\n'),
            Event::Rule => {
                ensure_blank_line(&mut out);
                out.push_str("────────\n");
            }
            Event::TaskListMarker(done) => {
                out.push_str(if done { "[x] " } else { "[ ] " });
            }
            _ => {}
        }
    }

    let trimmed = out.trim_end();
    let mut rendered = trimmed.to_string();
    if !rendered.is_empty() {
        rendered.push('\n');
    }
    rendered
}

fn ensure_blank_line(out: &mut String) {
    if out.is_empty() {
        return;
    }
    while !out.ends_with("\n\n") {
        out.push('\n');
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rich_surface_probe_succeeds() {
        assert!(RichSurface::new().is_ok());
    }

    #[test]
    fn host_initializes_rich_by_default() {
        let host = EditorHost::initialize();
        assert!(host.is_ready());
        assert!(host.is_rich());
    }

    #[test]
    fn fallback_to_plain_on_init_error() {
        let mut host = EditorHost::deferred();
        host.complete_init(Err(NoteError::Api("engine missing".into())));

        assert!(host.is_ready());
        assert!(!host.is_rich());

        // The plain surface honors the same contract
        host.set_content("# Still works");
        assert_eq!(host.content(), "# Still works");
        assert_eq!(host.render(), "# Still works");
    }

    #[test]
    fn set_content_suppresses_its_own_notification() {
        let mut host = EditorHost::initialize();
        host.set_content("# pushed");

        // The echo of the programmatic push is swallowed...
        assert_eq!(host.notify_edited("# pushed"), None);
        // ...but a real user edit goes through
        assert_eq!(
            host.notify_edited("# typed").as_deref(),
            Some("# typed")
        );
        assert_eq!(host.content(), "# typed");
    }

    #[test]
    fn exactly_one_notification_is_suppressed_per_push() {
        let mut host = EditorHost::initialize();
        host.set_content("a");
        host.set_content("b");
        assert_eq!(host.notify_edited("b"), None);
        assert_eq!(host.notify_edited("c").as_deref(), Some("c"));
    }

    #[test]
    fn deferred_host_replays_last_pending_content() {
        let mut host = EditorHost::deferred();
        host.set_content("# first tab");
        host.set_content("# second tab");
        assert!(!host.is_ready());

        host.complete_init(RichSurface::new());

        // The eventually-ready surface reflects the last requested tab
        assert_eq!(host.content(), "# second tab");
        // The replay is a programmatic push, so its echo is suppressed
        assert_eq!(host.notify_edited("# second tab"), None);
    }

    #[test]
    fn edits_while_initializing_are_dropped() {
        let mut host = EditorHost::deferred();
        assert_eq!(host.notify_edited("typed too early"), None);
    }

    #[test]
    fn raw_mode_round_trip_preserves_edits() {
        let mut host = EditorHost::initialize();
        host.set_content("# Original\n\nbody");

        let seeded = host.enter_raw().to_string();
        assert_eq!(seeded, "# Original\n\nbody");
        assert_eq!(host.mode(), ViewMode::Raw);

        let persisted = host.leave_raw("# Edited\n\nnew body");
        assert_eq!(host.mode(), ViewMode::Rendered);
        assert_eq!(persisted, "# Edited\n\nnew body");
        // The rich view now shows exactly the edited raw text
        assert_eq!(host.content(), "# Edited\n\nnew body");
    }

    #[test]
    fn raw_mode_without_edits_loses_nothing() {
        let mut host = EditorHost::initialize();
        host.set_content("some *markdown* here");

        let seeded = host.enter_raw().to_string();
        let back = host.leave_raw(&seeded);
        assert_eq!(back, "some *markdown* here");
        assert_eq!(host.content(), "some *markdown* here");
    }

    #[test]
    fn render_strips_markdown_structure() {
        let mut host = EditorHost::initialize();
        host.set_content("# Title\n\n- alpha\n- beta\n");
        let rendered = host.render();

        assert!(rendered.contains("Title\n====="));
        assert!(rendered.contains("• alpha"));
        assert!(!rendered.contains('#'));
        assert!(!rendered.contains("- alpha"));
    }

    #[test]
    fn render_numbers_ordered_lists() {
        let rendered = render_markdown("1. one\n2. two\n");
        assert!(rendered.contains("1. one"));
        assert!(rendered.contains("2. two"));
    }

    #[test]
    fn render_indents_code_blocks() {
        let rendered = render_markdown("```\nlet x = 1;\n```\n");
        assert!(rendered.contains("    let x = 1;"));
    }

    #[test]
    fn normalize_markdown_collapses_blank_runs() {
        let normalized = normalize_markdown("alpha\n\n\n\n\nbeta\n").unwrap();
        assert!(normalized.contains("alpha"));
        assert!(normalized.contains("beta"));
        assert!(!normalized.contains("\n\n\n"));
    }
}
