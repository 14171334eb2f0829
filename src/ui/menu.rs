//! Menu browser: category tabs and the active category's items.

use std::fmt::Write as _;

use serde_json::json;

use super::escape_html;
use crate::catalogue::MenuCatalogue;
use crate::view::{ViewState, VisibleItem};

/// Category tabs plus item list, swapped as one unit on selection.
#[must_use]
pub fn render_menu_browser(catalogue: &MenuCatalogue, view: &ViewState) -> String {
    let mut tabs = String::new();
    for category in catalogue.categories() {
        let active = view.active_category() == Some(category.name.as_str());
        let vals = json!({ "name": category.name }).to_string();
        // Writing to a String cannot fail.
        let _ = write!(
            tabs,
            r##"<button class="category-tab{}" type="button" role="tab" aria-selected="{active}" hx-post="/ui/category" hx-vals="{}" hx-target="#menu-browser" hx-swap="outerHTML">{}</button>"##,
            if active { " active" } else { "" },
            escape_html(&vals),
            escape_html(&category.name),
        );
    }

    let items: String = view.visible_items(catalogue).map(render_item).collect();

    format!(
        r#"<div id="menu-browser" class="menu-browser">
    <div class="menu-categories" role="tablist">{tabs}</div>
    <div class="menu-items">{items}</div>
</div>"#
    )
}

fn render_item(item: VisibleItem<'_>) -> String {
    format!(
        r#"<div class="menu-item"><div class="menu-item-left"><div class="veg-icon"><div class="veg-dot"></div></div><span class="menu-item-name">{}</span></div><span class="menu-item-price">{}</span></div>"#,
        escape_html(item.name),
        escape_html(&item.formatted_price),
    )
}
