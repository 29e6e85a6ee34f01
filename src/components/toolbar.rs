//! Toolbar with the API address, sort, search and page-size controls.

use maud::{html, Markup, PreEscaped, Render};

use super::{Button, Form, Input, Select};
use crate::constants::PAGE_SIZES;
use crate::models::{Direction, Field};
use crate::session::{Controls, SessionState};

/// Everything the toolbar needs to render.
#[derive(Debug, Clone)]
pub struct Toolbar<'a> {
    pub state: &'a SessionState,
    pub controls: Controls,
    /// Current text of the search box
    pub search_text: &'a str,
    pub base_url: Option<&'a str>,
}

impl<'a> Toolbar<'a> {
    #[must_use]
    pub const fn new(
        state: &'a SessionState,
        controls: Controls,
        search_text: &'a str,
        base_url: Option<&'a str>,
    ) -> Self {
        Self {
            state,
            controls,
            search_text,
            base_url,
        }
    }

    fn field_select(name: &'a str, id: &'a str, selected: Field) -> Select<'a> {
        Field::ALL
            .iter()
            .fold(Select::new(name).id(id), |select, field| {
                select.option(field.as_str(), field.label())
            })
            .selected(selected.as_str())
    }
}

/// Re-fetches control enablement as the search box changes.
const CONTROLS_SCRIPT: &str = r"
document.getElementById('search-input').addEventListener('input', function (e) {
    fetch('/api/controls?text=' + encodeURIComponent(e.target.value))
        .then(function (r) { return r.json(); })
        .then(function (c) {
            document.getElementById('search-button').disabled = !c.search_submit_enabled;
            document.getElementById('search-menu').disabled = !c.search_field_enabled;
        });
});
";

/// Label for the sort-order button.
const fn direction_label(direction: Direction) -> &'static str {
    match direction {
        Direction::Asc => "A\u{2192}Z",
        Direction::Desc => "Z\u{2192}A",
    }
}

impl Render for Toolbar<'_> {
    fn render(&self) -> Markup {
        let controls = self.controls;
        let sort_label = if self.state.sort_enabled {
            "Sorting: on"
        } else {
            "Sorting: off"
        };

        html! {
            div class="toolbar-container" {
                (Form::post("/settings/api", html! {
                    (Input::url("base_url")
                        .id("api-base-url")
                        .placeholder("API base URL")
                        .value(self.base_url.unwrap_or(""))
                        .required())
                    (Button::secondary("Load posts"))
                }))

                (Button::primary("Add post").href("/posts/new").id("add-post-link"))

                (Form::post("/sort/toggle", html! {
                    (Button::icon(sort_label).id("sort-toggle"))
                }))
                (Form::post("/sort/field", html! {
                    (Self::field_select("field", "sortMenu", self.state.sort_field)
                        .disabled_if(!controls.sort_field_enabled))
                    (Button::icon("Apply").disabled_if(!controls.sort_field_enabled))
                }))
                (Form::post("/sort/order", html! {
                    (Button::icon(direction_label(controls.direction_icon))
                        .id("sortOrderBtn")
                        .title("Toggle sort direction")
                        .disabled_if(!controls.sort_direction_enabled))
                }))

                (Form::post("/search", html! {
                    (Input::search("query")
                        .id("search-input")
                        .placeholder("Search posts")
                        .value(self.search_text))
                    (Self::field_select("field", "search-menu", self.state.search_field)
                        .disabled_if(!controls.search_field_enabled))
                    (Button::primary("Search")
                        .id("search-button")
                        .disabled_if(!controls.search_submit_enabled))
                }))
                (Form::post("/search/exit", html! {
                    (Button::secondary("Exit search")
                        .id("exit-search-button")
                        .disabled_if(!controls.exit_search_enabled))
                }))
                script { (PreEscaped(CONTROLS_SCRIPT)) }
            }
        }
    }
}

/// Page-size selector shown above the pagination bar.
#[derive(Debug, Clone, Copy)]
pub struct PageSizeMenu {
    pub selected: u32,
}

impl Render for PageSizeMenu {
    fn render(&self) -> Markup {
        html! {
            form method="post" action="/page-size" {
                select name="page_size" id="page-size-menu" {
                    @for size in PAGE_SIZES {
                        option value=(size) selected[size == self.selected] {
                            (size) " posts per page"
                        }
                    }
                }
                (Button::icon("Apply"))
            }
        }
    }
}
