//! Generic searchable, sortable, paginated table.
//!
//! SYSTEM CONTEXT
//! ==============
//! Admin pages hand this component a `TableConfig` and a reactive row list.
//! Search, sort and page state live here; the projection itself is
//! `TableConfig::project` so the view only renders what it is given.

use crudview::column::CellDisplay;
use crudview::table::{EMPTY_MESSAGE, PageWindow, RowHandler};
use crudview::{Row, SortState, TableConfig};
use leptos::prelude::*;

use crate::util::format::initial;

#[component]
pub fn DataTable<R>(
    config: TableConfig<R>,
    #[prop(into)] rows: Signal<Vec<R>>,
    #[prop(optional, into)] title: Option<String>,
    #[prop(default = true)] searchable: bool,
) -> impl IntoView
where
    R: Row + Clone + Send + Sync + 'static,
{
    let query = RwSignal::new(String::new());
    let sort = RwSignal::new(SortState::default());
    let page = RwSignal::new(1_usize);
    let span = config.column_span();
    let has_header = title.is_some() || searchable;
    let config = StoredValue::new(config);

    let projected = move || {
        let query = query.get();
        let sort = sort.get();
        let page = page.get();
        rows.with(|rows| {
            config.with_value(|cfg| {
                let view = cfg.project(rows, &query, &sort, page);
                (view.rows.into_iter().cloned().collect::<Vec<R>>(), view.window)
            })
        })
    };

    let headers = config.with_value(|cfg| {
        let has_actions = cfg.actions.any();
        let cells = cfg
            .columns
            .iter()
            .map(|col| {
                let key = col.key.clone();
                let sortable = col.sortable;
                let indicator_key = key.clone();
                view! {
                    <th
                        class="data-table__th"
                        class:data-table__th--sortable=sortable
                        on:click=move |_| {
                            if sortable {
                                sort.update(|s| s.toggle(&key));
                            }
                        }
                    >
                        <span>{col.label.clone()}</span>
                        {move || {
                            sort.with(|s| s.direction_for(&indicator_key))
                                .filter(|_| sortable)
                                .map(|dir| view! { <span class="data-table__sort">{dir.indicator()}</span> })
                        }}
                    </th>
                }
            })
            .collect_view();
        view! {
            <tr>
                {cells}
                {has_actions.then(|| view! { <th class="data-table__th">"Actions"</th> })}
            </tr>
        }
    });

    let body = move || {
        let (visible, _) = projected();
        if visible.is_empty() {
            return view! {
                <tr>
                    <td class="data-table__empty" colspan=span.to_string()>{EMPTY_MESSAGE}</td>
                </tr>
            }
            .into_any();
        }
        visible
            .into_iter()
            .map(|row| {
                let cells = config.with_value(|cfg| {
                    cfg.columns
                        .iter()
                        .map(|col| view! { <td class="data-table__td">{cell_view(col.display(&row))}</td> })
                        .collect_view()
                });
                let actions = config.with_value(|cfg| {
                    cfg.actions.any().then(|| {
                        let a = &cfg.actions;
                        view! {
                            <td class="data-table__td data-table__actions">
                                {action_button("View", "eye", a.view.clone(), row.clone())}
                                {action_button("Edit", "edit", a.edit.clone(), row.clone())}
                                {action_button("Delete", "trash", a.delete.clone(), row.clone())}
                            </td>
                        }
                    })
                });
                view! { <tr class="data-table__row">{cells}{actions}</tr> }
            })
            .collect_view()
            .into_any()
    };

    let footer = move || {
        let (_, window) = projected();
        window.filter(|w| w.total_pages > 1).map(|w| pager(w, page))
    };

    view! {
        <div class="card data-table">
            {has_header.then(|| view! {
                <div class="card__header data-table__header">
                    {title.map(|t| view! { <h2 class="card__title">{t}</h2> })}
                    {searchable.then(|| view! {
                        <input
                            class="input data-table__search"
                            type="search"
                            placeholder="Search..."
                            prop:value=move || query.get()
                            on:input=move |ev| {
                                query.set(event_target_value(&ev));
                                page.set(1);
                            }
                        />
                    })}
                </div>
            })}
            <div class="card__content">
                <div class="data-table__wrap">
                    <table class="data-table__table">
                        <thead>{headers}</thead>
                        <tbody>{body}</tbody>
                    </table>
                </div>
                {footer}
            </div>
        </div>
    }
}

fn pager(window: PageWindow, page: RwSignal<usize>) -> impl IntoView {
    let previous = window.previous_page();
    let next = window.next_page();
    view! {
        <div class="data-table__pager">
            <p class="muted">{window.range_label()}</p>
            <div class="data-table__pager-controls">
                <button
                    class="btn btn--outline btn--sm"
                    disabled=previous.is_none()
                    on:click=move |_| {
                        if let Some(p) = previous {
                            page.set(p);
                        }
                    }
                >
                    "‹ Previous"
                </button>
                <span>{format!("Page {} of {}", window.page, window.total_pages)}</span>
                <button
                    class="btn btn--outline btn--sm"
                    disabled=next.is_none()
                    on:click=move |_| {
                        if let Some(p) = next {
                            page.set(p);
                        }
                    }
                >
                    "Next ›"
                </button>
            </div>
        </div>
    }
}

fn action_button<R: Send + Sync + 'static>(
    label: &'static str,
    icon: &'static str,
    handler: Option<RowHandler<R>>,
    row: R,
) -> Option<impl IntoView> {
    handler.map(|handler| {
        view! {
            <button
                class=format!("btn btn--ghost btn--sm data-table__action data-table__action--{icon}")
                title=label
                on:click=move |_| handler(&row)
            >
                {label}
            </button>
        }
    })
}

/// Render one cell.
pub fn cell_view(display: CellDisplay) -> AnyView {
    match display {
        CellDisplay::Text(text) => text.into_any(),
        CellDisplay::Badge { label, tone } => view! { <span class=tone.css_class()>{label}</span> }.into_any(),
        CellDisplay::Image { src, alt } => view! { <img class="data-table__thumb" src=src alt=alt/> }.into_any(),
        CellDisplay::Avatar { name, src } => view! {
            <span class="data-table__person">
                {match src {
                    Some(src) => view! { <img class="avatar avatar--sm" src=src alt=name.clone()/> }.into_any(),
                    None => view! { <span class="avatar avatar--sm">{initial(&name)}</span> }.into_any(),
                }}
                <span>{name.clone()}</span>
            </span>
        }
        .into_any(),
    }
}
