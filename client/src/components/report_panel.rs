//! Reports section: generator controls, preview and history.

use leptos::prelude::*;

use crate::app::Actions;
use crate::render::{Entry, reports};
use crate::state::dashboard::DashboardState;
use crate::util::report::{RANGE_OPTIONS, ReportType};

#[component]
pub fn ReportPanel() -> impl IntoView {
    let state = expect_context::<RwSignal<DashboardState>>();
    let actions = expect_context::<Actions>();
    let preview = Memo::new(move |_| state.with(|s| s.report.as_ref().map(|r| r.preview())));
    let history = Memo::new(move |_| state.with(|s| reports::rows(&s.reports.load)));

    let on_generate = move |_| {
        actions.spawn(|c| async move {
            c.generate_report().await;
        });
    };
    let on_download = move |_| {
        actions.run(|c| {
            c.download_report();
        });
    };

    view! {
        <section class="content-section reports-section">
            <div class="section-header">
                <h2>"Reports"</h2>
            </div>
            <div class="report-controls">
                <div class="form-group">
                    <label>"Report Type"</label>
                    <select
                        prop:value=move || state.with(|s| s.ui.report_type.value())
                        on:change=move |ev| {
                            let value = event_target_value(&ev);
                            if let Some(kind) = ReportType::from_value(&value) {
                                state.update(|s| s.ui.report_type = kind);
                            }
                        }
                    >
                        {ReportType::ALL
                            .iter()
                            .map(|kind| view! { <option value=kind.value()>{kind.label()}</option> })
                            .collect_view()}
                    </select>
                </div>
                <div class="form-group">
                    <label>"Date Range"</label>
                    <select
                        prop:value=move || state.with(|s| s.ui.report_range_days.to_string())
                        on:change=move |ev| {
                            if let Ok(days) = event_target_value(&ev).parse::<u32>() {
                                state.update(|s| s.ui.report_range_days = days);
                            }
                        }
                    >
                        {RANGE_OPTIONS
                            .iter()
                            .map(|days| view! { <option value=days.to_string()>{format!("Last {days} days")}</option> })
                            .collect_view()}
                    </select>
                </div>
                <button class="btn btn-primary" on:click=on_generate>
                    <i class="fas fa-file-alt"></i>
                    " Generate Report"
                </button>
            </div>

            <div class="report-preview">
                {move || match preview.get() {
                    Some(p) => {
                        view! {
                            <div class="report-content">
                                <div class="report-header">
                                    <h3>{p.title}</h3>
                                    <button class="btn btn-secondary" on:click=on_download>
                                        <i class="fas fa-download"></i>
                                        " Download"
                                    </button>
                                </div>
                                <div class="report-meta">
                                    <p>"Report Type: " {p.report_type}</p>
                                    <p>"Date Range: " {p.range}</p>
                                    <p>"Generated On: " {p.generated_on}</p>
                                    <p>"Report ID: " {p.report_id}</p>
                                </div>
                                <div class="report-details">
                                    <h4>"Details"</h4>
                                    <p>{p.details}</p>
                                </div>
                                <div class="report-summary">
                                    {p
                                        .bars
                                        .into_iter()
                                        .map(|bar| {
                                            view! {
                                                <div class="summary-item">
                                                    <span>{bar.label}</span>
                                                    <div class="progress-bar">
                                                        <div class="progress-fill" style:width=format!("{}%", bar.percent)></div>
                                                    </div>
                                                    <span>{format!("{}%", bar.percent)}</span>
                                                </div>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            </div>
                        }
                            .into_any()
                    }
                    None => {
                        view! {
                            <p class="report-placeholder">"Select a report type and date range, then generate a report."</p>
                        }
                            .into_any()
                    }
                }}
            </div>

            <div class="report-history">
                <h3>"Report History"</h3>
                <ul class="report-list">
                    {move || {
                        history
                            .get()
                            .into_iter()
                            .map(|entry| match entry {
                                Entry::Item(row) => {
                                    let report_id = row.report_id;
                                    view! {
                                        <li class="report-item" attr:data-id=row.key>
                                            <span class="report-title">{row.title}</span>
                                            <span class="report-date">{row.generated_on}</span>
                                            <span class="report-summary-text">{row.summary}</span>
                                            <Show when=move || report_id.is_some()>
                                                <button
                                                    class="btn-icon view"
                                                    title="View"
                                                    on:click=move |_| {
                                                        if let Some(id) = report_id {
                                                            actions.spawn(move |c| async move {
                                                                c.view_report(id).await;
                                                            });
                                                        }
                                                    }
                                                >
                                                    <i class="fas fa-eye"></i>
                                                </button>
                                            </Show>
                                        </li>
                                    }
                                        .into_any()
                                }
                                Entry::Placeholder(p) => view! { <li class=p.kind.class()>{p.message}</li> }.into_any(),
                            })
                            .collect_view()
                    }}
                </ul>
            </div>
        </section>
    }
}
