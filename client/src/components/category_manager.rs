//! Category manager modal body: add/edit form above the category list.

use leptos::prelude::*;

use crate::app::Actions;
use crate::components::fields::{InputField, TextAreaField};
use crate::render::Entry;
use crate::render::categories;
use crate::state::dashboard::DashboardState;
use crate::state::modal::DeleteTarget;

#[component]
pub fn CategoryManager() -> impl IntoView {
    let state = expect_context::<RwSignal<DashboardState>>();
    let actions = expect_context::<Actions>();
    let rows = Memo::new(move |_| state.with(|s| categories::rows(&s.categories.load)));
    let editing = Memo::new(move |_| state.with(|s| s.modal.editing_id().is_some()));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        actions.spawn(|c| async move {
            c.submit_category().await;
        });
    };

    view! {
        <div class="category-manager">
            <form class="modal-form category-form" on:submit=on_submit>
                <InputField
                    label="Category Name"
                    read=|s| s.drafts.category.name.clone()
                    write=|s, v| s.drafts.category.name = v
                />
                <TextAreaField
                    label="Description"
                    read=|s| s.drafts.category.description.clone()
                    write=|s, v| s.drafts.category.description = v
                />
                <div class="form-actions">
                    <Show when=move || editing.get()>
                        <button type="button" class="btn btn-secondary" on:click=move |_| actions.run(|c| c.cancel_category_edit())>
                            "Cancel Edit"
                        </button>
                    </Show>
                    <button type="submit" class="btn btn-primary">
                        {move || if editing.get() { "Update Category" } else { "Add Category" }}
                    </button>
                </div>
            </form>

            <div class="category-list">
                {move || {
                    rows.get()
                        .into_iter()
                        .map(|entry| match entry {
                            Entry::Item(row) => {
                                let id = row.key;
                                view! {
                                    <div class="category-item" attr:data-id=id>
                                        <div class="category-info">
                                            <span class=format!("category-badge {}", row.class)>{row.name}</span>
                                            <p class="category-description">{row.description}</p>
                                        </div>
                                        <div class="category-actions">
                                            <button
                                                class="btn-icon edit"
                                                title="Edit"
                                                on:click=move |_| {
                                                    actions.spawn(move |c| async move {
                                                        c.begin_category_edit(id).await;
                                                    });
                                                }
                                            >
                                                <i class="fas fa-edit"></i>
                                            </button>
                                            <button
                                                class="btn-icon delete"
                                                title="Delete"
                                                on:click=move |_| actions.run(|c| c.request_delete(DeleteTarget::Category { id }))
                                            >
                                                <i class="fas fa-trash"></i>
                                            </button>
                                        </div>
                                    </div>
                                }
                                    .into_any()
                            }
                            Entry::Placeholder(p) => {
                                view! { <p class=p.kind.class()>{p.message}</p> }.into_any()
                            }
                        })
                        .collect_view()
                }}
            </div>
        </div>
    }
}
