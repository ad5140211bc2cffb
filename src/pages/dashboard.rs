use leptos::logging;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::api::{ApiClient, Job, RecommendationItem, RequestSeq, Student};
use crate::components::recommendation_card::RecommendationCard;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let client: ApiClient = expect_context();

    // Listings state
    let (students, set_students) = signal::<Vec<Student>>(vec![]);
    let (jobs, set_jobs) = signal::<Vec<Job>>(vec![]);
    let (load_error, set_load_error) = signal::<Option<String>>(None);

    // Recommendation request state
    let (client_id, set_client_id) = signal(String::from("client_U1"));
    let (student_uid, set_student_uid) = signal(String::from("S1"));
    let (items, set_items) = signal::<Vec<RecommendationItem>>(vec![]);
    let (is_recommending, set_is_recommending) = signal(false);
    let (rec_error, set_rec_error) = signal::<Option<String>>(None);

    // Feedback state
    let (message, set_message) = signal::<Option<String>>(None);
    let (feedback_error, set_feedback_error) = signal::<Option<String>>(None);

    let rec_seq = RequestSeq::default();

    // Fetch both listings concurrently on mount. A failure leaves the list
    // empty but is surfaced instead of swallowed.
    {
        let client = client.clone();
        Effect::new(move |_| {
            let students_client = client.clone();
            spawn_local(async move {
                match students_client.list_students().await {
                    Ok(list) => set_students.set(list),
                    Err(e) => {
                        logging::error!("failed to load students: {}", e);
                        set_load_error.set(Some(e.to_string()));
                    }
                }
            });

            let jobs_client = client.clone();
            spawn_local(async move {
                match jobs_client.list_jobs().await {
                    Ok(list) => set_jobs.set(list),
                    Err(e) => {
                        logging::error!("failed to load jobs: {}", e);
                        set_load_error.set(Some(e.to_string()));
                    }
                }
            });
        });
    }

    let do_recommend = {
        let client = client.clone();
        let rec_seq = rec_seq.clone();
        move |_| {
            set_message.set(None);
            set_rec_error.set(None);
            set_feedback_error.set(None);
            set_is_recommending.set(true);

            let client = client.clone();
            let rec_seq = rec_seq.clone();
            let cid = client_id.get();
            let uid = student_uid.get();
            let request_id = rec_seq.issue();
            spawn_local(async move {
                let result = client.recommend(&cid, &uid, 5).await;

                // A newer click supersedes this request; drop the response.
                if !rec_seq.is_current(request_id) {
                    return;
                }

                match result {
                    Ok(list) => set_items.set(list),
                    Err(e) => set_rec_error.set(Some(e.to_string())),
                }
                set_is_recommending.set(false);
            });
        }
    };

    let send_feedback = {
        let client = client.clone();
        move |job_uid: String, liked: bool| {
            let client = client.clone();
            let uid = student_uid.get();
            let notes = if liked { "liked" } else { "not matched" };

            set_message.set(None);
            set_feedback_error.set(None);
            spawn_local(async move {
                match client.send_feedback(&uid, &job_uid, liked, notes).await {
                    Ok(()) => {
                        set_message.set(Some(format!("Feedback saved for {}", job_uid)));
                    }
                    Err(e) => {
                        set_feedback_error.set(Some(format!(
                            "Feedback failed for {}: {}",
                            job_uid, e
                        )));
                    }
                }
            });
        }
    };

    view! {
        <div class="page dashboard-page">
            <h2>"Dashboard"</h2>

            <Show when=move || load_error.get().is_some()>
                <div class="status-text status-error">
                    {move || format!("Failed to load listings: {}", load_error.get().unwrap_or_default())}
                </div>
            </Show>

            <section class="panel">
                <h3>"Get Recommendations"</h3>
                <div class="input-row">
                    <input
                        type="text"
                        class="input"
                        placeholder="client id (e.g., client_U1)"
                        prop:value=move || client_id.get()
                        on:input=move |ev| {
                            set_client_id.set(event_target_value(&ev));
                        }
                    />
                    <input
                        type="text"
                        class="input"
                        placeholder="student uid (e.g., S1)"
                        prop:value=move || student_uid.get()
                        on:input=move |ev| {
                            set_student_uid.set(event_target_value(&ev));
                        }
                    />
                    <button
                        class="btn btn-primary"
                        on:click=do_recommend
                        disabled=move || is_recommending.get()
                    >
                        {move || if is_recommending.get() { "Recommending..." } else { "Recommend" }}
                    </button>
                </div>
                <Show when=move || rec_error.get().is_some()>
                    <span class="status-text status-error">
                        {move || rec_error.get().unwrap_or_default()}
                    </span>
                </Show>
            </section>

            <section class="panel">
                <h3>"Results"</h3>
                <Show when=move || items.get().is_empty()>
                    <p class="empty-state">"No results yet."</p>
                </Show>
                <div class="results-list">
                    <For
                        each=move || items.get()
                        key=|item| item.job_uid.clone()
                        children=move |item: RecommendationItem| {
                            let job_uid = item.job_uid.clone();
                            let send_feedback = send_feedback.clone();
                            view! {
                                <RecommendationCard
                                    item=item
                                    on_feedback=move |liked: bool| {
                                        send_feedback(job_uid.clone(), liked)
                                    }
                                />
                            }
                        }
                    />
                </div>
                <Show when=move || message.get().is_some()>
                    <div class="status-text status-saved">
                        {move || message.get().unwrap_or_default()}
                    </div>
                </Show>
                <Show when=move || feedback_error.get().is_some()>
                    <div class="status-text status-error">
                        {move || feedback_error.get().unwrap_or_default()}
                    </div>
                </Show>
            </section>

            <section class="panel">
                <h3>"Students"</h3>
                <Show when=move || students.get().is_empty()>
                    <p class="empty-state">"No students loaded."</p>
                </Show>
                <ul class="listing">
                    <For
                        each=move || students.get()
                        key=|s| s.student_uid.clone()
                        children=|s: Student| {
                            view! {
                                <li class="listing-item">
                                    {format!("{} – {} (GPA {:.2}, skills: {})", s.student_uid, s.name, s.gpa, s.skills)}
                                </li>
                            }
                        }
                    />
                </ul>
            </section>

            <section class="panel">
                <h3>"Jobs"</h3>
                <Show when=move || jobs.get().is_empty()>
                    <p class="empty-state">"No jobs loaded."</p>
                </Show>
                <ul class="listing">
                    <For
                        each=move || jobs.get()
                        key=|j| j.job_uid.clone()
                        children=|j: Job| {
                            view! {
                                <li class="listing-item">
                                    {format!(
                                        "{} – {} @ {} ({}, {}), salary {} – {}",
                                        j.job_uid, j.role, j.company, j.industry, j.work_type,
                                        j.salary_min, j.salary_max,
                                    )}
                                </li>
                            }
                        }
                    />
                </ul>
            </section>
        </div>
    }
}
