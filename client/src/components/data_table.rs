//! Table body shared by the inventory and shipment panels.
//!
//! Rows arrive paired with their filter visibility; hidden rows stay in the
//! DOM with the `hidden` attribute so filtering never re-fetches.

use leptos::prelude::*;

use crate::render::{Entry, RowKind, TableRow};

#[component]
pub fn DataTable(
    headers: &'static [&'static str],
    #[prop(into)] rows: Signal<Vec<(Entry<TableRow>, bool)>>,
    on_edit: Callback<i64>,
    on_delete: Callback<TableRow>,
) -> impl IntoView {
    let colspan = (headers.len() + 1).to_string();

    view! {
        <table class="data-table">
            <thead>
                <tr>
                    {headers.iter().map(|h| view! { <th>{*h}</th> }).collect_view()}
                    <th>"Actions"</th>
                </tr>
            </thead>
            <tbody>
                {move || {
                    let colspan = colspan.clone();
                    rows.get()
                        .into_iter()
                        .map(move |(entry, shown)| match entry {
                            Entry::Item(row) => data_row(row, shown, on_edit, on_delete).into_any(),
                            Entry::Placeholder(p) => {
                                view! {
                                    <tr class=p.kind.class()>
                                        <td colspan=colspan.clone()>{p.message}</td>
                                    </tr>
                                }
                                    .into_any()
                            }
                        })
                        .collect_view()
                }}
            </tbody>
        </table>
    }
}

fn data_row(row: TableRow, shown: bool, on_edit: Callback<i64>, on_delete: Callback<TableRow>) -> impl IntoView {
    let key = row.key;
    let cells = row
        .cells
        .iter()
        .enumerate()
        .map(|(i, cell)| {
            if i == row.badge_column {
                view! {
                    <td>
                        <span class=row.badge.class.clone()>{row.badge.label.clone()}</span>
                    </td>
                }
                    .into_any()
            } else {
                view! { <td>{cell.clone()}</td> }.into_any()
            }
        })
        .collect_view();

    view! {
        <tr class=RowKind::Data.class() attr:data-id=key hidden=!shown>
            {cells}
            <td class="actions">
                <button class="btn-icon edit" title="Edit" on:click=move |_| on_edit.run(key)>
                    <i class="fas fa-edit"></i>
                </button>
                <button class="btn-icon delete" title="Delete" on:click=move |_| on_delete.run(row.clone())>
                    <i class="fas fa-trash"></i>
                </button>
            </td>
        </tr>
    }
}
