// SPDX-License-Identifier: MIT
//
// sl-nvim — a statusline plugin for Neovim.
//
// This is the binary that wires together all the crates:
//
//   sl-color → palette quantization, highlight command generation
//   sl-line  → statusline items, lint status, template assembly
//   sl-rpc   → plugin protocol: request parsing, handler registry
//
// The host owns the transport; this process owns the semantics. The
// registry built here answers the host's `specs` discovery and routes
// its calls:
//
//   BuildStatusLine()        → the statusline template for the buffer
//   SetHighlightGroups(buf)  → flip groups to focused/unfocused variants
//   GetLintStatus()          → lint token, re-linking the lint group
//   VimEnter,ColorScheme     → (re)issue every startup highlight define
//
// The subcommands print exactly what the plugin would send to the
// editor, which is the fastest way to eyeball a color or template
// change without a live host attached:
//
//   sl-nvim highlights        startup highlight commands
//   sl-nvim statusline [BUF]  the statusline template for a buffer
//   sl-nvim specs             plugin specs as JSON
//   sl-nvim quantize HEX...   nearest palette index per color

use std::env;
use std::process;

use anyhow::{Context, Result, bail};
use log::info;

use sl_color::{Color, Palette};
use sl_line::{Editor, LintItem, StatusLine, Value};
use sl_rpc::{AutocmdHandler, DispatchError, FunctionHandler, Registry};

// ─── Logging ─────────────────────────────────────────────────────────────────

/// Log to a file: the host owns this process's stdio, so the log is the
/// only place diagnostics can go when running as a plugin.
fn setup_logger() -> Result<(), fern::InitError> {
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "{date} [{target} {level}] {message}",
                date = chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
                target = record.target(),
                level = record.level(),
            ));
        })
        .level(log::LevelFilter::Debug)
        .chain(fern::log_file("/tmp/sl-nvim.log")?)
        .apply()?;
    Ok(())
}

// ─── Handlers ────────────────────────────────────────────────────────────────

/// `BuildStatusLine()` — evaluated by the host's statusline expression;
/// returns the template for whatever buffer is being drawn.
struct BuildStatusLineFn {
    line: StatusLine,
}

impl FunctionHandler for BuildStatusLineFn {
    fn name(&self) -> &str {
        "BuildStatusLine"
    }

    fn is_sync(&self) -> bool {
        true
    }

    fn handle(&mut self, editor: &mut dyn Editor, _args: &[Value]) -> Result<Value, DispatchError> {
        Ok(Value::from(self.line.build(editor)))
    }
}

/// `SetHighlightGroups(buf)` — called from inside the template on every
/// window redraw; links each group to its `_C` or `_NC` variant
/// depending on whether that window holds the current buffer.
struct SetHighlightGroupsFn {
    line: StatusLine,
}

impl FunctionHandler for SetHighlightGroupsFn {
    fn name(&self) -> &str {
        "SetHighlightGroups"
    }

    fn is_sync(&self) -> bool {
        true
    }

    fn handle(&mut self, editor: &mut dyn Editor, args: &[Value]) -> Result<Value, DispatchError> {
        let active = args
            .first()
            .and_then(Value::as_u64)
            .ok_or_else(|| DispatchError::BadArguments(self.name().to_string()))?;
        self.line.switch_groups(editor, active);
        // The template splices this call's result into the line, so the
        // reply must render as nothing.
        Ok(Value::from(""))
    }
}

/// `GetLintStatus()` — evaluated per draw of the lint segment.
struct GetLintStatusFn {
    item: LintItem,
}

impl FunctionHandler for GetLintStatusFn {
    fn name(&self) -> &str {
        "GetLintStatus"
    }

    fn is_sync(&self) -> bool {
        true
    }

    fn handle(&mut self, editor: &mut dyn Editor, _args: &[Value]) -> Result<Value, DispatchError> {
        Ok(Value::from(self.item.evaluate(editor)))
    }
}

/// Issues every startup highlight define on `VimEnter`, and again on
/// `ColorScheme` because a colorscheme switch clears them.
struct ApplyHighlightsAutocmd {
    commands: Vec<String>,
}

impl AutocmdHandler for ApplyHighlightsAutocmd {
    fn event(&self) -> &str {
        "VimEnter,ColorScheme"
    }

    fn pattern(&self) -> &str {
        "*"
    }

    fn handle(&mut self, editor: &mut dyn Editor, _args: &[Value]) {
        for cmd in &self.commands {
            editor.command(cmd);
        }
    }
}

/// Wire every handler for one statusline layout.
fn build_registry(line: &StatusLine, palette: &Palette) -> Registry {
    let mut registry = Registry::new();
    registry.register_function(Box::new(BuildStatusLineFn { line: line.clone() }));
    registry.register_function(Box::new(SetHighlightGroupsFn { line: line.clone() }));
    registry.register_function(Box::new(GetLintStatusFn {
        item: LintItem::new(),
    }));
    registry.register_autocmd(Box::new(ApplyHighlightsAutocmd {
        commands: line.highlight_setup(palette).commands,
    }));
    registry
}

// ─── Subcommands ─────────────────────────────────────────────────────────────

fn cmd_highlights() {
    let line = StatusLine::default_layout();
    for cmd in line.highlight_setup(Palette::global()).commands {
        println!("{cmd}");
    }
}

fn cmd_statusline(buf: Option<&String>) -> Result<()> {
    let buf = match buf {
        Some(arg) => arg
            .parse::<u64>()
            .with_context(|| format!("invalid buffer number: {arg}"))?,
        None => 1,
    };
    println!("{}", StatusLine::default_layout().template(buf));
    Ok(())
}

fn cmd_specs() -> Result<()> {
    let line = StatusLine::default_layout();
    let registry = build_registry(&line, Palette::global());
    println!("{}", serde_json::to_string_pretty(&registry.specs())?);
    Ok(())
}

fn cmd_quantize(args: &[String]) -> Result<()> {
    if args.is_empty() {
        bail!("quantize needs at least one #rrggbb color");
    }
    let palette = Palette::global();
    for arg in args {
        let color = Color::parse(arg).with_context(|| format!("cannot parse color: {arg}"))?;
        let idx = palette.nearest_index(color);
        println!("{arg} -> {idx} ({})", palette.color(idx));
    }
    Ok(())
}

fn usage() {
    eprintln!("usage: sl-nvim <command>");
    eprintln!();
    eprintln!("commands:");
    eprintln!("  highlights        print the startup highlight commands");
    eprintln!("  statusline [BUF]  print the statusline template for a buffer");
    eprintln!("  specs             print the plugin specs as JSON");
    eprintln!("  quantize HEX...   print the nearest palette index per color");
}

fn main() -> Result<()> {
    if let Err(err) = setup_logger() {
        // Not fatal: the subcommands print to stdout regardless.
        eprintln!("sl-nvim: logging disabled: {err}");
    }
    info!("started");

    let args: Vec<String> = env::args().skip(1).collect();
    let Some(command) = args.first() else {
        usage();
        process::exit(2);
    };

    match command.as_str() {
        "highlights" => cmd_highlights(),
        "statusline" => cmd_statusline(args.get(1))?,
        "specs" => cmd_specs()?,
        "quantize" => cmd_quantize(&args[1..])?,
        other => {
            eprintln!("sl-nvim: unknown command: {other}");
            usage();
            process::exit(2);
        }
    }

    info!("done");
    Ok(())
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use serde_json::json;

    use sl_line::CallError;

    use super::*;

    struct FakeHost {
        buf: u64,
        commands: Vec<String>,
    }

    impl FakeHost {
        const fn new(buf: u64) -> Self {
            Self {
                buf,
                commands: Vec::new(),
            }
        }
    }

    impl Editor for FakeHost {
        fn command(&mut self, cmd: &str) {
            self.commands.push(cmd.to_string());
        }

        fn call_function(&mut self, name: &str, _args: Vec<Value>) -> Result<Value, CallError> {
            Err(CallError::UnknownFunction(name.to_string()))
        }

        fn current_buf(&mut self) -> u64 {
            self.buf
        }
    }

    fn registry() -> Registry {
        let line = StatusLine::default_layout();
        build_registry(&line, Palette::global())
    }

    #[test]
    fn build_status_line_answers_with_the_template() {
        let mut host = FakeHost::new(5);
        let reply = registry()
            .handle_request(&mut host, "p:function:BuildStatusLine", &[json!([])])
            .unwrap();
        let line = reply.as_str().unwrap();
        assert!(line.starts_with("%{SetHighlightGroups(5)}"));
        assert!(line.ends_with("%*"));
    }

    #[test]
    fn set_highlight_groups_links_every_group() {
        let mut host = FakeHost::new(2);
        let reply = registry()
            .handle_request(&mut host, "p:function:SetHighlightGroups", &[json!([2])])
            .unwrap();
        assert_eq!(reply, json!(""));
        assert_eq!(host.commands.len(), 8);
        assert!(host.commands.iter().all(|cmd| cmd.ends_with("_C")));
    }

    #[test]
    fn set_highlight_groups_requires_a_buffer_argument() {
        let mut host = FakeHost::new(2);
        let err = registry()
            .handle_request(&mut host, "p:function:SetHighlightGroups", &[json!([])])
            .unwrap_err();
        assert_eq!(
            err,
            DispatchError::BadArguments("SetHighlightGroups".to_string())
        );
    }

    #[test]
    fn get_lint_status_reports_good_without_providers() {
        let mut host = FakeHost::new(1);
        let reply = registry()
            .handle_request(&mut host, "p:function:GetLintStatus", &[json!([])])
            .unwrap();
        assert_eq!(reply, json!("\u{a0}o "));
        assert_eq!(
            host.commands,
            vec!["highlight! link StatusLine_LintStatus StatusLine_LintStatus_LINT_GOOD"]
        );
    }

    #[test]
    fn startup_autocmd_issues_every_define() {
        let mut host = FakeHost::new(1);
        registry().handle_notification(
            &mut host,
            "p:autocmd:VimEnter,ColorScheme:*",
            &[json!([])],
        );
        // 8 groups × 2 variants + StatusLine + StatusLineNC.
        assert_eq!(host.commands.len(), 18);
        assert!(host.commands.iter().all(|cmd| cmd.starts_with("highlight ")));
    }

    #[test]
    fn specs_name_every_entry_point() {
        let specs = registry().specs();
        let names: Vec<&str> = specs
            .as_array()
            .unwrap()
            .iter()
            .map(|spec| spec.get("name").unwrap().as_str().unwrap())
            .collect();
        assert_eq!(
            names,
            vec![
                "BuildStatusLine",
                "GetLintStatus",
                "SetHighlightGroups",
                "VimEnter,ColorScheme",
            ]
        );
    }
}
