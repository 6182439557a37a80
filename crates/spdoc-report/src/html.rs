//! Static HTML fragment for the catalog view.
//!
//! The markup mirrors the documentation page's class names so the existing
//! stylesheet applies unchanged. Hidden elements carry an inline
//! `display: none`; every text node and attribute is escaped by quick-xml.

use std::io::Write;

use anyhow::{Context, Result};
use quick_xml::Writer;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};

use spdoc_core::Page;
use spdoc_model::{ProcedureRecord, ReportCard, TypeFilter};

use crate::terminal::NO_RESULTS;

const HIDDEN: &str = "display: none";
const SHOWN: &str = "display: block";

/// Render the page fragment into a string.
pub fn page_fragment(page: &Page<'_>) -> Result<String> {
    let mut buffer = Vec::new();
    write_page_fragment(&mut buffer, page)?;
    String::from_utf8(buffer).context("html output is not utf-8")
}

/// Write the filter bar, the procedure list, the no-results indicator and
/// the report cards.
pub fn write_page_fragment<W: Write>(out: W, page: &Page<'_>) -> Result<()> {
    let mut xml = Writer::new(out);

    open(&mut xml, "section", &[("id", "procedures")])?;
    write_filter_bar(&mut xml, page)?;
    open(&mut xml, "div", &[("id", "proceduresContainer")])?;
    for card in page.listing().cards() {
        write_procedure_card(&mut xml, card.record, card.expanded)?;
    }
    close(&mut xml, "div")?;
    let no_results_style = if page.listing().shows_no_results() {
        SHOWN
    } else {
        HIDDEN
    };
    text_element(
        &mut xml,
        "div",
        &[("id", "noResults"), ("style", no_results_style)],
        NO_RESULTS,
    )?;
    close(&mut xml, "section")?;

    open(&mut xml, "section", &[("id", "reports")])?;
    for (index, card) in page.catalog().reports().iter().enumerate() {
        let reports = page.reports();
        write_report_card(
            &mut xml,
            card,
            reports.is_visible(index),
            reports.is_open(index),
            reports.caption(index),
        )?;
    }
    close(&mut xml, "section")?;
    Ok(())
}

fn write_filter_bar<W: Write>(xml: &mut Writer<W>, page: &Page<'_>) -> Result<()> {
    open(xml, "div", &[("class", "filter-bar")])?;
    for control in TypeFilter::controls() {
        let class = if page.view().is_active(control) {
            "filter-btn active"
        } else {
            "filter-btn"
        };
        text_element(
            xml,
            "button",
            &[("class", class), ("data-filter", control.as_str())],
            &filter_label(control),
        )?;
    }
    close(xml, "div")
}

fn write_procedure_card<W: Write>(
    xml: &mut Writer<W>,
    record: &ProcedureRecord,
    expanded: bool,
) -> Result<()> {
    open(
        xml,
        "div",
        &[("class", "procedure-card"), ("data-name", record.name.as_str())],
    )?;
    text_element(xml, "div", &[("class", "procedure-name")], &record.name)?;
    text_element(xml, "div", &[("class", "procedure-params")], &record.params)?;
    text_element(xml, "div", &[("class", "procedure-type")], &record.category)?;
    text_element(xml, "div", &[("class", "procedure-desc")], &record.description)?;

    let style = if expanded { SHOWN } else { HIDDEN };
    open(xml, "div", &[("class", "details-content"), ("style", style)])?;
    labelled_paragraph(xml, "Returns:", &record.returns)?;
    labelled_paragraph(xml, "Used By:", &record.usage)?;
    if let Some(example) = &record.example {
        open(xml, "p", &[])?;
        text_element(xml, "strong", &[], "Example:")?;
        xml.write_event(Event::Empty(BytesStart::new("br")))?;
        text_element(xml, "code", &[], example)?;
        close(xml, "p")?;
    }
    close(xml, "div")?;
    close(xml, "div")
}

fn write_report_card<W: Write>(
    xml: &mut Writer<W>,
    card: &ReportCard,
    visible: bool,
    open_panel: bool,
    caption: &str,
) -> Result<()> {
    if visible {
        open(xml, "div", &[("class", "report-card")])?;
    } else {
        open(xml, "div", &[("class", "report-card"), ("style", HIDDEN)])?;
    }
    text_element(xml, "div", &[("class", "report-title")], &card.title)?;
    text_element(xml, "div", &[("class", "report-desc")], &card.description)?;
    text_element(xml, "div", &[("class", "report-file")], &card.file)?;
    text_element(xml, "button", &[("class", "details-btn")], caption)?;
    let class = if open_panel {
        "details-content open"
    } else {
        "details-content"
    };
    open(xml, "div", &[("class", class)])?;
    if !card.details.is_empty() {
        open(xml, "ul", &[])?;
        for line in &card.details {
            text_element(xml, "li", &[], line)?;
        }
        close(xml, "ul")?;
    }
    close(xml, "div")?;
    close(xml, "div")
}

fn filter_label(control: TypeFilter) -> String {
    let raw = control.as_str();
    let mut chars = raw.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn labelled_paragraph<W: Write>(xml: &mut Writer<W>, label: &str, text: &str) -> Result<()> {
    open(xml, "p", &[])?;
    text_element(xml, "strong", &[], label)?;
    xml.write_event(Event::Text(BytesText::new(" ")))?;
    xml.write_event(Event::Text(BytesText::new(text)))?;
    close(xml, "p")
}

fn open<W: Write>(xml: &mut Writer<W>, name: &str, attributes: &[(&str, &str)]) -> Result<()> {
    let mut start = BytesStart::new(name);
    for attribute in attributes {
        start.push_attribute(*attribute);
    }
    xml.write_event(Event::Start(start))?;
    Ok(())
}

fn close<W: Write>(xml: &mut Writer<W>, name: &str) -> Result<()> {
    xml.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}

fn text_element<W: Write>(
    xml: &mut Writer<W>,
    name: &str,
    attributes: &[(&str, &str)],
    text: &str,
) -> Result<()> {
    open(xml, name, attributes)?;
    xml.write_event(Event::Text(BytesText::new(text)))?;
    close(xml, name)
}
