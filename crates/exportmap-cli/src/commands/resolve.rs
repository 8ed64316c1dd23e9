//! `exportmap resolve` command implementation.
//!
//! Reads a package.json, normalizes its `exports` field and prints the flat
//! `subpath -> target` map.
//!
//! Usage:
//! - `exportmap resolve` - resolve `./package.json` with the default conditions
//! - `exportmap resolve path/to/package.json --conditions browser,import`
//! - `exportmap resolve --no-expand` - keep `*` patterns instead of scanning disk
//! - `exportmap --json resolve --out exports.json` - write the map atomically

use exportmap_core::{
    exports_field, read_package_json, Config, Error, ExportsResolver, FlatExports,
    NormalizeOptions,
};
use miette::{IntoDiagnostic, Result};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Arguments of the resolve command, already parsed by clap.
#[derive(Debug, Clone, Default)]
pub struct ResolveArgs {
    /// Manifest to read. Defaults to `<cwd>/package.json`.
    pub manifest: Option<PathBuf>,
    /// Conditions replacing the defaults. Empty keeps the defaults.
    pub conditions: Vec<String>,
    /// Skip wildcard expansion.
    pub no_expand: bool,
    /// Expansion root. Defaults to the manifest's directory.
    pub root: Option<PathBuf>,
    /// Write the JSON map here instead of printing it.
    pub out: Option<PathBuf>,
}

/// Run the resolve command.
///
/// When `config.json_logs` is set, stdout carries a single JSON object: the
/// flat map on success, `{"ok": false, "error": {...}}` on failure.
pub fn run(config: &Config, args: &ResolveArgs) -> Result<()> {
    let manifest = args
        .manifest
        .as_deref()
        .map_or_else(|| config.manifest_path(), |p| absolutize(&config.cwd, p));

    match resolve_manifest(config, args, &manifest) {
        Ok(flat) => {
            info!(manifest = %manifest.display(), entries = flat.len(), "resolved exports");
            emit(config, args, &flat)
        }
        Err(err) if config.json_logs => {
            println!(
                "{}",
                serde_json::json!({
                    "ok": false,
                    "error": {
                        "code": err.code(),
                        "message": err.to_string(),
                    }
                })
            );
            std::process::exit(1);
        }
        Err(err) => Err(err).into_diagnostic(),
    }
}

fn resolve_manifest(
    config: &Config,
    args: &ResolveArgs,
    manifest: &Path,
) -> Result<FlatExports, Error> {
    debug!(manifest = %manifest.display(), "reading manifest");
    let pkg_json = read_package_json(manifest)?;

    let mut options = NormalizeOptions::new().with_conditions(args.conditions.iter().cloned());
    if !args.no_expand {
        let root = match &args.root {
            Some(root) => absolutize(&config.cwd, root),
            None => manifest
                .parent()
                .map_or_else(|| config.cwd.clone(), Path::to_path_buf),
        };
        debug!(root = %root.display(), "expanding wildcards");
        options = options.with_cwd(root);
    }

    let resolver = ExportsResolver::default();
    debug!(
        conditions = ?resolver.effective_conditions(&options),
        "matching conditions"
    );
    resolver.normalize(exports_field(&pkg_json), &options)
}

fn emit(config: &Config, args: &ResolveArgs, flat: &FlatExports) -> Result<()> {
    if let Some(out) = &args.out {
        let path = absolutize(&config.cwd, out);
        let mut json = serde_json::to_string_pretty(flat).into_diagnostic()?;
        json.push('\n');
        exportmap_util::fs::atomic_write(&path, json.as_bytes()).into_diagnostic()?;
        info!(path = %path.display(), "wrote exports map");
        return Ok(());
    }

    if config.json_logs {
        let json = serde_json::to_string_pretty(flat).into_diagnostic()?;
        println!("{json}");
        return Ok(());
    }

    let mut out = io::stdout().lock();
    for (subpath, target) in flat {
        writeln!(out, "{subpath} -> {target}").into_diagnostic()?;
    }
    Ok(())
}

fn absolutize(cwd: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    }
}
