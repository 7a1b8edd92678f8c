//! Source generation
//!
//! Renders entries as Rust source built from the `stowfs` runtime types:
//!
//! - **filesystem mode**: one `LazyLock<Fs>` static listing every entry
//! - **per-file mode**: one `File` static per embedded file
//!
//! Output is deterministic: entries are emitted in virtual path order and
//! nothing depends on the walk order or the time of generation.

use std::path::Path;

use stowfs::{File, SCHEMA_VERSION};

use crate::fileset::FileSet;

/// What to name things in a generated unit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerateOptions {
    /// Module the unit is written into; only used in the header comment
    pub package: String,

    /// Path of the runtime crate; empty means `File`/`Fs` are already in scope
    pub import: String,

    /// Static name (filesystem mode) or name prefix (per-file mode)
    pub var: String,
}

/// Render the whole set as one filesystem static.
///
/// An empty `var` is treated like an empty name and falls back to the
/// identifier rules of [`identifier`].
pub fn render_fs(set: &FileSet, options: &GenerateOptions) -> String {
    let var = if options.var.is_empty() {
        identifier("")
    } else {
        options.var.clone()
    };

    let mut out = header(options, &["File", "Fs"], true);
    out.push_str("#[allow(non_upper_case_globals)]\n");
    out.push_str(&format!(
        "pub static {var}: LazyLock<Fs> = LazyLock::new(|| {{\n"
    ));
    out.push_str("    Fs::new(vec![\n");
    for (_, file) in set.sorted() {
        out.push_str("        ");
        out.push_str(&entry_literal(file));
        out.push_str(",\n");
    }
    out.push_str("    ])\n");
    out.push_str("});\n");
    out
}

/// Render one file as a standalone static named `<var><Identifier>`.
pub fn render_file(file: &File, options: &GenerateOptions) -> String {
    let mut out = header(options, &["File"], false);
    out.push_str("#[allow(non_upper_case_globals)]\n");
    out.push_str(&format!(
        "pub static {}{}: File = {};\n",
        options.var,
        identifier(file.name()),
        entry_literal(file)
    ));
    out
}

/// The literal that rebuilds `file` at run time.
pub fn entry_literal(file: &File) -> String {
    let path = string_literal(file.path());
    let name = string_literal(file.name());
    let mod_time = file.mod_time_secs();

    if file.is_dir() {
        return format!("File::dir({path}, {name}, {mod_time})");
    }
    match file.payload() {
        Some(payload) if file.size() > 0 => format!(
            "File::file({path}, {name}, {mod_time}, {}, r\"{payload}\")",
            file.size()
        ),
        _ => format!("File::empty({path}, {name}, {mod_time})"),
    }
}

/// Turn a file name into a type-style identifier.
///
/// Runs of anything but ASCII letters act as word breaks and are dropped; the
/// letter after a break and the first letter are capitalised. A break with no
/// letter after it survives as `_`. Names without letters become `Embedded`.
///
/// `logo.png` → `LogoPng`, `app-v2_final.js` → `AppVFinalJs`.
pub fn identifier(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut at_break = false;
    for c in name.chars() {
        if c.is_ascii_alphabetic() {
            if at_break || out.is_empty() {
                out.push(c.to_ascii_uppercase());
            } else {
                out.push(c);
            }
            at_break = false;
        } else {
            at_break = true;
        }
    }

    if out.is_empty() {
        return "Embedded".to_string();
    }
    if at_break {
        out.push('_');
    }
    if out == "Self" {
        out.push('_');
    }
    out
}

/// Identifier for a filesystem static written to `out`, from its file stem.
pub fn var_name(out: &Path) -> String {
    let stem = out
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    identifier(&stem)
}

/// Name of the directory `out` is written into.
pub fn package_name(out: &Path) -> String {
    let absolute = std::path::absolute(out).unwrap_or_else(|_| out.to_path_buf());
    absolute
        .parent()
        .and_then(Path::file_name)
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn header(options: &GenerateOptions, types: &[&str], lazy: bool) -> String {
    let mut out = format!(
        "// Code generated by stowfs for module `{}`. DO NOT EDIT.\n\n",
        options.package
    );
    if lazy {
        out.push_str("use std::sync::LazyLock;\n\n");
    }
    if !options.import.is_empty() {
        let names = match types {
            [single] => single.to_string(),
            _ => format!("{{{}}}", types.join(", ")),
        };
        out.push_str(&format!("use {}::{names};\n\n", options.import));
        out.push_str(&format!(
            "const _: () = assert!(\n    {}::SCHEMA_VERSION == {SCHEMA_VERSION},\n    \"generated for stowfs schema version {SCHEMA_VERSION}\"\n);\n\n",
            options.import
        ));
    }
    out
}

/// A Rust string literal for `s`.
fn string_literal(s: &str) -> String {
    format!("{s:?}")
}
