use std::fs;
use std::io::{self, BufWriter, Write};

use anyhow::{Context, Result, anyhow, bail};
use tracing::{info, info_span, warn};

use spdoc_catalog::Catalog;
use spdoc_core::{Page, PageOptions, PageUpdate, ToggleOutcome, UiEvent};
use spdoc_model::{FilterComposition, ProcedureType, TypeFilter};
use spdoc_report::{
    filter_bar, listing_text, procedure_details_text, reports_text, visible_procedures_json,
    write_page_fragment,
};

use crate::cli::{HtmlArgs, ListArgs, OutputFormatArg, ReportsArgs, ShowArgs, TypeArg};
use spdoc_cli::browse::run_session;
use spdoc_cli::settings::{Settings, settings_path, settings_to_toml};

pub fn type_filter(arg: TypeArg) -> TypeFilter {
    match arg {
        TypeArg::All => TypeFilter::All,
        TypeArg::Select => TypeFilter::Only(ProcedureType::Select),
        TypeArg::Insert => TypeFilter::Only(ProcedureType::Insert),
        TypeArg::Update => TypeFilter::Only(ProcedureType::Update),
        TypeArg::Delete => TypeFilter::Only(ProcedureType::Delete),
    }
}

/// Apply the type filter, then the search, the order a reader would click.
fn apply_filters(
    page: &mut Page<'_>,
    composition: FilterComposition,
    search: Option<&str>,
    kind: Option<TypeArg>,
) {
    if let Some(kind) = kind {
        page.handle(UiEvent::FilterSelected(type_filter(kind)));
    }
    if let Some(query) = search {
        if kind.is_some() && composition == FilterComposition::Override {
            warn!("--search replaces --type in override mode; use --compose intersect to combine");
        }
        page.handle(UiEvent::SearchInput(query.to_string()));
    }
}

pub fn run_list(catalog: &Catalog, options: PageOptions, args: &ListArgs) -> Result<()> {
    let span = info_span!("list", search = args.search.as_deref().unwrap_or(""));
    let _guard = span.enter();
    let composition = options.composition;
    let mut page = Page::new(catalog, options);
    apply_filters(&mut page, composition, args.search.as_deref(), args.kind);
    if let Some(name) = &args.expand
        && page.handle(UiEvent::CardClicked(name.clone()))
            == PageUpdate::CardToggled(ToggleOutcome::NotFound)
    {
        bail!("procedure '{name}' is not in the current list");
    }
    info!(visible = page.listing().len(), "listed procedures");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match args.format {
        OutputFormatArg::Table => {
            writeln!(out, "{}", filter_bar(page.view()))?;
            writeln!(out, "{}", listing_text(&page))?;
        }
        OutputFormatArg::Json => writeln!(out, "{}", visible_procedures_json(&page)?)?,
        OutputFormatArg::Html => {
            write_page_fragment(&mut out, &page)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

pub fn run_show(catalog: &Catalog, args: &ShowArgs) -> Result<()> {
    let record = catalog
        .get(&args.name)
        .ok_or_else(|| anyhow!("unknown procedure '{}'", args.name))?;
    println!("{}", procedure_details_text(record));
    Ok(())
}

pub fn run_reports(catalog: &Catalog, options: PageOptions, args: &ReportsArgs) -> Result<()> {
    let mut page = Page::new(catalog, options);
    if let Some(query) = &args.search {
        page.handle(UiEvent::SearchInput(query.clone()));
    }
    if let Some(index) = args.open
        && page.handle(UiEvent::ReportToggleClicked(index))
            == PageUpdate::ReportToggled(ToggleOutcome::NotFound)
    {
        bail!(
            "report index {index} is out of range (catalog has {} reports)",
            catalog.reports().len()
        );
    }
    println!("{}", reports_text(&page));
    Ok(())
}

pub fn run_html(catalog: &Catalog, options: PageOptions, args: &HtmlArgs) -> Result<()> {
    let composition = options.composition;
    let mut page = Page::new(catalog, options);
    apply_filters(&mut page, composition, args.search.as_deref(), args.kind);
    match &args.output {
        Some(path) => {
            if let Some(parent) = path.parent()
                && !parent.as_os_str().is_empty()
            {
                fs::create_dir_all(parent)
                    .with_context(|| format!("create {}", parent.display()))?;
            }
            let file =
                fs::File::create(path).with_context(|| format!("create {}", path.display()))?;
            let mut writer = BufWriter::new(file);
            write_page_fragment(&mut writer, &page)?;
            writer.flush()?;
            info!(path = %path.display(), "wrote html");
        }
        None => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            write_page_fragment(&mut out, &page)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

pub fn run_browse(catalog: &Catalog, options: PageOptions) -> Result<()> {
    let mut page = Page::new(catalog, options);
    let stdin = io::stdin();
    run_session(&mut page, stdin.lock(), io::stdout())
}

pub fn run_config(settings: &Settings) -> Result<()> {
    match settings_path() {
        Some(path) => println!("# default settings file: {}", path.display()),
        None => println!("# default settings file: unavailable on this platform"),
    }
    print!("{}", settings_to_toml(settings)?);
    Ok(())
}
