//! Students list. Search ignores accents and case; paging and the search term
//! are remembered per table in `localStorage`.

use crate::{
    app_lib::storage::{BrowserStore, TableState, load_table_state, save_table_state},
    components::{Alert, AlertKind, AppShell, Button, ButtonVariant, InitialsAvatar, Spinner},
    features::{
        auth::RequireModule,
        modules::ModuleName,
        students::{
            client,
            types::{Student, filter_students},
        },
    },
};
use leptos::prelude::*;

const TABLE_KEY: &str = "students";
const TABLE_ID: &str = "main";

#[component]
pub fn StudentsPage() -> impl IntoView {
    view! {
        <AppShell>
            <RequireModule module=ModuleName::Students>
                <StudentsTable />
            </RequireModule>
        </AppShell>
    }
}

#[component]
fn StudentsTable() -> impl IntoView {
    let students = LocalResource::new(move || async move { client::list_students().await });
    let table = RwSignal::new(load_table_state(
        &*BrowserStore::open_or_memory(),
        TABLE_KEY,
        TABLE_ID,
    ));

    Effect::new(move |_| {
        table.with(|state| {
            save_table_state(&*BrowserStore::open_or_memory(), TABLE_KEY, TABLE_ID, state)
        });
    });

    view! {
        <div class="space-y-6">
            <div class="flex flex-col gap-4 sm:flex-row sm:items-end sm:justify-between">
                <div class="space-y-1">
                    <h1 class="text-2xl font-semibold text-gray-900 dark:text-white">"Students"</h1>
                    <p class="text-sm text-gray-500 dark:text-gray-400">
                        "Students enrolled in your school."
                    </p>
                </div>
                <input
                    type="search"
                    placeholder="Search by name, email or group"
                    class="w-full sm:w-72 rounded-lg border border-gray-200 bg-white px-3 py-2 text-sm text-gray-900 focus:border-indigo-400 focus:ring-2 focus:ring-indigo-200 dark:border-gray-600 dark:bg-gray-800 dark:text-white"
                    prop:value=move || table.with(|state| state.search.clone())
                    on:input=move |event| {
                        let search = event_target_value(&event);
                        table.update(|state| {
                            state.search = search;
                            state.page = 0;
                        });
                    }
                />
            </div>

            <Suspense fallback=move || view! {
                <div class="flex justify-center py-12">
                    <Spinner />
                </div>
            }>
                {move || match students.get() {
                    Some(Ok(list)) => view! { <StudentsResults students=list table=table /> }.into_any(),
                    Some(Err(err)) => {
                        view! { <Alert kind=AlertKind::Error message=err.to_string() /> }.into_any()
                    }
                    None => view! {
                        <div class="flex justify-center py-12">
                            <Spinner />
                        </div>
                    }
                    .into_any(),
                }}
            </Suspense>
        </div>
    }
}

#[component]
fn StudentsResults(students: Vec<Student>, table: RwSignal<TableState>) -> impl IntoView {
    let filtered =
        Memo::new(move |_| table.with(|state| filter_students(&students, &state.search)));
    let page_count = Memo::new(move |_| {
        filtered.with(|rows| table.with(|state| state.page_count(rows.len())))
    });
    let visible = Memo::new(move |_| {
        filtered.with(|rows| {
            let range = table.with(|state| state.page_range(rows.len()));
            rows[range].to_vec()
        })
    });
    let current_page =
        Memo::new(move |_| table.with(|state| state.page).min(page_count.get() - 1));

    let previous = Callback::new(move |_: ()| {
        table.update(|state| state.page = current_page.get_untracked().saturating_sub(1))
    });
    let next = Callback::new(move |_: ()| {
        let last = page_count.get_untracked() - 1;
        table.update(|state| state.page = (current_page.get_untracked() + 1).min(last))
    });

    view! {
        <div class="overflow-hidden bg-white dark:bg-gray-800 shadow-sm border border-gray-200 dark:border-gray-700 rounded-lg">
            <table class="min-w-full divide-y divide-gray-200 dark:divide-gray-700">
                <thead class="bg-gray-50 dark:bg-gray-900/50">
                    <tr>
                        <th scope="col" class="px-6 py-3 text-left text-xs font-medium text-gray-500 dark:text-gray-400 uppercase tracking-wider">
                            "Name"
                        </th>
                        <th scope="col" class="px-6 py-3 text-left text-xs font-medium text-gray-500 dark:text-gray-400 uppercase tracking-wider">
                            "Grade"
                        </th>
                        <th scope="col" class="px-6 py-3 text-left text-xs font-medium text-gray-500 dark:text-gray-400 uppercase tracking-wider">
                            "Group"
                        </th>
                        <th scope="col" class="px-6 py-3 text-left text-xs font-medium text-gray-500 dark:text-gray-400 uppercase tracking-wider">
                            "Status"
                        </th>
                    </tr>
                </thead>
                <tbody class="divide-y divide-gray-200 dark:divide-gray-700">
                    <Show
                        when=move || !visible.with(Vec::is_empty)
                        fallback=|| view! {
                            <tr>
                                <td colspan="4" class="px-6 py-12 text-center text-sm text-gray-500 dark:text-gray-400">
                                    "No students found."
                                </td>
                            </tr>
                        }
                    >
                        <For
                            each=move || visible.get()
                            key=|student| student.id.clone()
                            children=|student| view! { <StudentRow student=student /> }
                        />
                    </Show>
                </tbody>
            </table>
        </div>

        <div class="flex items-center justify-between text-sm text-gray-500 dark:text-gray-400">
            <span>
                {move || format!(
                    "Page {} of {} · {} students",
                    current_page.get() + 1,
                    page_count.get(),
                    filtered.with(Vec::len)
                )}
            </span>
            <div class="flex gap-2">
                <Button
                    variant=ButtonVariant::Secondary
                    disabled=Signal::derive(move || current_page.get() == 0)
                    on_click=previous
                >
                    "Previous"
                </Button>
                <Button
                    variant=ButtonVariant::Secondary
                    disabled=Signal::derive(move || current_page.get() + 1 >= page_count.get())
                    on_click=next
                >
                    "Next"
                </Button>
            </div>
        </div>
    }
}

#[component]
fn StudentRow(student: Student) -> impl IntoView {
    let name = student.full_name();
    let grade = student.grade();
    let group = student.group_name.clone().unwrap_or_else(|| "-".to_string());
    let email = student.email.clone().unwrap_or_default();

    view! {
        <tr class="hover:bg-gray-50 dark:hover:bg-gray-700/50 transition-colors">
            <td class="px-6 py-4 whitespace-nowrap">
                <div class="flex items-center gap-3">
                    <InitialsAvatar name=name.clone() />
                    <div>
                        <p class="text-sm font-medium text-gray-900 dark:text-white">{name}</p>
                        <p class="text-xs text-gray-500 dark:text-gray-400">{email}</p>
                    </div>
                </div>
            </td>
            <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-500 dark:text-gray-400">{grade}</td>
            <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-500 dark:text-gray-400">{group}</td>
            <td class="px-6 py-4 whitespace-nowrap text-sm">
                {if student.is_active {
                    view! { <span class="text-emerald-600 dark:text-emerald-400">"Active"</span> }
                        .into_any()
                } else {
                    view! { <span class="text-gray-400">"Inactive"</span> }.into_any()
                }}
            </td>
        </tr>
    }
}
