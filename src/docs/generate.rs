//! Markdown generator.

use std::collections::HashSet;
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use clap::ValueEnum;

use crate::docs::manifest::Manifest;
use crate::docs::DocsError;
use crate::routing::template::compile;
use crate::routing::MethodSet;

/// Which sections to generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum DocKind {
    /// Routes, middlewares and static files.
    #[default]
    #[value(alias = "0")]
    All,
    #[value(alias = "1")]
    Routes,
    #[value(alias = "2")]
    Middlewares,
    #[value(alias = "3")]
    StaticFiles,
}

impl DocKind {
    fn routes(self) -> bool {
        matches!(self, DocKind::All | DocKind::Routes)
    }

    fn middlewares(self) -> bool {
        matches!(self, DocKind::All | DocKind::Middlewares)
    }

    fn static_files(self) -> bool {
        matches!(self, DocKind::All | DocKind::StaticFiles)
    }
}

/// Render the requested sections of `manifest` as Markdown.
///
/// Every route is validated first, whatever `kind` asks for.
pub fn generate(manifest: &Manifest, title: &str, kind: DocKind) -> Result<String, DocsError> {
    let declared: HashSet<&str> = manifest.middlewares.iter().map(|m| m.name.as_str()).collect();

    let mut rows = Vec::with_capacity(manifest.routes.len());
    for route in &manifest.routes {
        let route_err = |source| DocsError::Route {
            path: route.path.clone(),
            source,
        };
        let methods = MethodSet::parse(&route.path, &route.methods).map_err(route_err)?;
        let compiled = compile(&route.path).map_err(route_err)?;

        if let Some(name) = route.middlewares.iter().find(|m| !declared.contains(m.as_str())) {
            return Err(DocsError::UnknownMiddleware {
                route: route.path.clone(),
                name: name.clone(),
            });
        }

        let params = if compiled.is_static() {
            "-".to_string()
        } else {
            compiled
                .param_names
                .iter()
                .map(|n| format!("`{n}`"))
                .collect::<Vec<_>>()
                .join(", ")
        };
        let middlewares = if route.middlewares.is_empty() {
            "-".to_string()
        } else {
            route.middlewares.join(" → ")
        };

        rows.push(format!(
            "| `{}` | {} | {} | {} | {} |",
            route.path,
            methods,
            params,
            middlewares,
            cell(&route.description)
        ));
    }

    // Writing into a String cannot fail.
    let mut out = String::new();
    let _ = writeln!(out, "# {title}\n");

    if kind.routes() {
        let _ = writeln!(out, "## Routes\n");
        let _ = writeln!(out, "| Path | Methods | Parameters | Middlewares | Description |");
        let _ = writeln!(out, "|------|---------|------------|-------------|-------------|");
        for row in &rows {
            let _ = writeln!(out, "{row}");
        }
        out.push('\n');
    }

    if kind.middlewares() {
        let _ = writeln!(out, "## Middlewares\n");
        let _ = writeln!(out, "| Name | Description |");
        let _ = writeln!(out, "|------|-------------|");
        for m in &manifest.middlewares {
            let _ = writeln!(out, "| `{}` | {} |", m.name, cell(&m.description));
        }
        out.push('\n');
    }

    if kind.static_files() {
        let _ = writeln!(out, "## Static Files\n");
        let _ = writeln!(out, "| Mount | Directory | Description |");
        let _ = writeln!(out, "|-------|-----------|-------------|");
        for s in &manifest.static_files {
            let _ = writeln!(
                out,
                "| `{}` | `{}` | {} |",
                s.mount,
                s.directory,
                cell(&s.description)
            );
        }
        out.push('\n');
    }

    Ok(out)
}

/// Final document path: `output` with a `.md` extension.
pub fn output_path(output: &Path) -> PathBuf {
    if output.extension().is_some_and(|ext| ext == "md") {
        output.to_path_buf()
    } else {
        let mut name = output.as_os_str().to_owned();
        name.push(".md");
        PathBuf::from(name)
    }
}

/// Read `source`, render it and write the result next to `output`.
///
/// Returns the path actually written.
pub fn write_docs(source: &Path, output: &Path, kind: DocKind) -> Result<PathBuf, DocsError> {
    let manifest = Manifest::load(source)?;
    let title = source
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "Routes".to_string());
    let document = generate(&manifest, &title, kind)?;

    let target = output_path(output);
    fs::write(&target, document).map_err(|source| DocsError::Write {
        path: target.clone(),
        source,
    })?;

    tracing::info!(
        source = %source.display(),
        output = %target.display(),
        routes = manifest.routes.len(),
        ?kind,
        "Documentation written"
    );
    Ok(target)
}

fn cell(text: &str) -> String {
    if text.is_empty() {
        "-".to_string()
    } else {
        text.replace('|', "\\|").replace('\n', " ")
    }
}
