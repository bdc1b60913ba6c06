#![forbid(unsafe_code)]

//! Prebuilt pages for controller tests.

use reveal_core::memory::MemoryDom;
use reveal_core::{ControllerId, Dom, ElementId, Markup};
use reveal_widgets::{DisclosureConfig, ModalConfig, Page};

/// Elements of one bound disclosure.
#[derive(Debug, Clone, Copy)]
pub struct DisclosureHandles {
    pub id: ControllerId,
    pub trigger: ElementId,
    pub target: ElementId,
}

/// Elements of one bound modal.
#[derive(Debug, Clone, Copy)]
pub struct ModalHandles {
    pub id: ControllerId,
    pub link: ElementId,
    pub panel: ElementId,
    /// A paragraph inside the panel, for "click inside" checks.
    pub content: ElementId,
    /// A `.close` button nested two levels inside the panel.
    pub nested_close: ElementId,
}

/// Elements of one modal's markup, before binding.
#[derive(Debug, Clone, Copy)]
pub struct ModalMarkup {
    pub link: ElementId,
    pub panel: ElementId,
    pub content: ElementId,
    pub nested_close: ElementId,
}

/// A page with a `href="#details"` trigger and a `#details` panel.
pub fn disclosure_page(initially_hidden: bool) -> (Page<MemoryDom>, DisclosureHandles) {
    let mut dom = MemoryDom::new();
    let body = dom.body();
    let trigger = dom.insert(
        body,
        Markup::new("a")
            .class("fb-disclosure")
            .attr("href", "#details")
            .text("Details"),
    );
    let target = dom.insert(body, Markup::new("div").id("details"));
    dom.set_displayed(target, !initially_hidden);

    let mut page = Page::new(dom);
    let id = page.bind_disclosure(trigger, DisclosureConfig::default());
    (
        page,
        DisclosureHandles {
            id,
            trigger,
            target,
        },
    )
}

/// Append an unbound modal panel (and its link) to `dom`.
pub fn add_modal_markup(dom: &mut MemoryDom, panel_id: &str) -> ModalMarkup {
    let body = dom.body();
    let link = dom.insert(
        body,
        Markup::new("a").attr("href", format!("#{panel_id}")).text("Open"),
    );
    let panel = dom.insert(body, Markup::new("div").class("fb-modal").id(panel_id));
    let content = dom.insert(panel, Markup::new("p").text("Body"));
    let footer = dom.insert(panel, Markup::new("footer"));
    let actions = dom.insert(footer, Markup::new("div"));
    let nested_close = dom.insert(actions, Markup::new("button").class("close").text("Cancel"));
    ModalMarkup {
        link,
        panel,
        content,
        nested_close,
    }
}

/// A page with one bound modal per id, in order.
pub fn modal_page(panel_ids: &[&str]) -> (Page<MemoryDom>, Vec<ModalHandles>) {
    let mut dom = MemoryDom::new();
    let markup: Vec<_> = panel_ids
        .iter()
        .map(|id| add_modal_markup(&mut dom, id))
        .collect();

    let mut page = Page::new(dom);
    let handles = markup
        .into_iter()
        .map(|m| ModalHandles {
            id: page.bind_modal(m.panel, ModalConfig::default()),
            link: m.link,
            panel: m.panel,
            content: m.content,
            nested_close: m.nested_close,
        })
        .collect();
    (page, handles)
}
