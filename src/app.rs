use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::components::account_form::AccountForm;
use crate::components::account_list::AccountList;
use crate::components::auth_form::AuthForm;
use crate::components::csv_importer::CsvImporter;
use crate::components::dashboard::Dashboard;
use crate::components::expense_sharing::ExpenseSharing;
use crate::components::filter_bar::FilterBar;
use crate::components::icons::*;
use crate::components::monthly_report::MonthlyReport;
use crate::filter::AccountFilter;
use crate::hooks::{use_accounts, use_session, SessionHandle, SessionStatus};
use crate::models::Account;

#[derive(Clone, Copy, PartialEq)]
enum Tab {
    Dashboard,
    Accounts,
    Monthly,
    Sharing,
}

struct TabItem {
    label: &'static str,
    tab: Tab,
    icon: fn() -> Html,
}

const TABS: [TabItem; 4] = [
    TabItem {
        label: "Dashboard",
        tab: Tab::Dashboard,
        icon: icon_home,
    },
    TabItem {
        label: "Contas",
        tab: Tab::Accounts,
        icon: icon_file_text,
    },
    TabItem {
        label: "Relatório Mensal",
        tab: Tab::Monthly,
        icon: icon_calendar,
    },
    TabItem {
        label: "Divisão",
        tab: Tab::Sharing,
        icon: icon_users,
    },
];

fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|window| window.confirm_with_message(message).ok())
        .unwrap_or(false)
}

#[derive(Properties, PartialEq)]
struct MainAppProps {
    session: SessionHandle,
}

#[function_component(MainApp)]
fn main_app(props: &MainAppProps) -> Html {
    let accounts = use_accounts();
    let active_tab = use_state(|| Tab::Dashboard);
    let filter = use_state(AccountFilter::default);
    let show_account_form = use_state(|| false);
    let editing_account = use_state(|| None::<Account>);
    let show_importer = use_state(|| false);

    let on_add_account = {
        let show_account_form = show_account_form.clone();
        let editing_account = editing_account.clone();
        Callback::from(move |_| {
            editing_account.set(None);
            show_account_form.set(true);
        })
    };

    let on_edit_account = {
        let show_account_form = show_account_form.clone();
        let editing_account = editing_account.clone();
        Callback::from(move |account: Account| {
            editing_account.set(Some(account));
            show_account_form.set(true);
        })
    };

    let on_save_account = {
        let accounts = accounts.clone();
        let show_account_form = show_account_form.clone();
        let editing_account = editing_account.clone();
        Callback::from(move |draft| {
            let accounts = accounts.clone();
            let show_account_form = show_account_form.clone();
            let editing = (*editing_account).clone();
            let editing_account = editing_account.clone();
            spawn_local(async move {
                let result = match &editing {
                    Some(account) => accounts.update(&account.id, draft).await,
                    None => accounts.create(draft).await,
                };
                match result {
                    Ok(()) => {
                        show_account_form.set(false);
                        editing_account.set(None);
                    }
                    Err(_) => alert("Erro ao salvar conta. Tente novamente."),
                }
            });
        })
    };

    let on_cancel_form = {
        let show_account_form = show_account_form.clone();
        let editing_account = editing_account.clone();
        Callback::from(move |_| {
            show_account_form.set(false);
            editing_account.set(None);
        })
    };

    let on_delete_account = {
        let accounts = accounts.clone();
        Callback::from(move |id: String| {
            if !confirm("Tem certeza que deseja excluir esta conta?") {
                return;
            }
            let accounts = accounts.clone();
            spawn_local(async move {
                if accounts.remove(&id).await.is_err() {
                    alert("Erro ao excluir conta. Tente novamente.");
                }
            });
        })
    };

    let on_import_click = {
        let show_importer = show_importer.clone();
        Callback::from(move |_| show_importer.set(true))
    };
    let on_importer_close = {
        let show_importer = show_importer.clone();
        Callback::from(move |_| show_importer.set(false))
    };
    let on_import_success = {
        let accounts = accounts.clone();
        Callback::from(move |_| accounts.refresh())
    };

    let on_logout = {
        let session = props.session.clone();
        Callback::from(move |_| session.sign_out())
    };

    let on_filter_change = {
        let filter = filter.clone();
        Callback::from(move |next| filter.set(next))
    };

    let filtered_accounts = filter.apply(&accounts.accounts);
    let user_name = props
        .session
        .user
        .as_ref()
        .map(|user| user.name.clone())
        .unwrap_or_default();

    let content = if *accounts.loading {
        html! {
            <div class="flex items-center justify-center py-24">
                <div class="text-center">
                    <div class="animate-spin rounded-full h-12 w-12 border-b-2 border-blue-600 mx-auto mb-4"></div>
                    <p class="text-gray-600">{"Carregando..."}</p>
                </div>
            </div>
        }
    } else {
        match *active_tab {
            Tab::Dashboard => html! {
                <div>
                    <div class="mb-8">
                        <h2 class="text-2xl font-bold text-gray-900 mb-2">{"Dashboard Financeiro"}</h2>
                        <p class="text-gray-600">{"Visão geral das suas finanças"}</p>
                    </div>
                    <Dashboard accounts={(*accounts.accounts).clone()} />
                </div>
            },
            Tab::Accounts => html! {
                <div>
                    <div class="mb-8">
                        <h2 class="text-2xl font-bold text-gray-900 mb-2">{"Gestão de Contas"}</h2>
                        <p class="text-gray-600">{"Gerencie suas receitas e despesas"}</p>
                    </div>
                    <div class="space-y-6">
                        <FilterBar
                            filter={(*filter).clone()}
                            on_change={on_filter_change}
                            on_add_click={on_add_account}
                            on_import_click={on_import_click}
                        />
                        <AccountList
                            accounts={filtered_accounts}
                            on_edit={on_edit_account}
                            on_delete={on_delete_account}
                        />
                    </div>
                </div>
            },
            Tab::Monthly => html! {
                <div>
                    <div class="mb-8">
                        <h2 class="text-2xl font-bold text-gray-900 mb-2">{"Relatório Mensal"}</h2>
                        <p class="text-gray-600">{"Receitas e despesas agrupadas por mês"}</p>
                    </div>
                    <MonthlyReport accounts={(*accounts.accounts).clone()} />
                </div>
            },
            Tab::Sharing => html! {
                <div>
                    <div class="mb-8">
                        <h2 class="text-2xl font-bold text-gray-900 mb-2">{"Divisão de Contas"}</h2>
                        <p class="text-gray-600">{"Divida despesas compartilhadas entre pessoas"}</p>
                    </div>
                    <ExpenseSharing accounts={(*accounts.accounts).clone()} />
                </div>
            },
        }
    };

    html! {
        <div class="min-h-screen bg-gray-50">
            <header class="bg-white shadow-sm border-b border-gray-100">
                <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                    <div class="flex justify-between items-center h-16">
                        <div class="flex items-center gap-3">
                            <div class="p-2 bg-blue-600 rounded-lg text-white">{ icon_bar_chart() }</div>
                            <h1 class="text-xl font-bold text-gray-900">{"Controle Financeiro"}</h1>
                        </div>

                        <nav class="flex space-x-1">
                            { for TABS.iter().map(|item| {
                                let is_active = item.tab == *active_tab;
                                let class_name = if is_active {
                                    "px-4 py-2 rounded-lg font-medium transition-all duration-200 flex items-center gap-2 bg-blue-100 text-blue-700"
                                } else {
                                    "px-4 py-2 rounded-lg font-medium transition-all duration-200 flex items-center gap-2 text-gray-600 hover:text-gray-900 hover:bg-gray-100"
                                };
                                let active_tab = active_tab.clone();
                                let tab = item.tab;
                                html! {
                                    <button class={class_name} onclick={Callback::from(move |_| active_tab.set(tab))}>
                                        { (item.icon)() }
                                        { item.label }
                                    </button>
                                }
                            }) }
                        </nav>

                        <div class="flex items-center gap-3">
                            <span class="text-sm text-gray-600 hidden sm:block">{ user_name }</span>
                            <button
                                onclick={on_logout}
                                title="Sair"
                                class="p-2 text-gray-400 hover:text-red-600 hover:bg-red-50 rounded-lg transition-all duration-200"
                            >
                                { icon_log_out() }
                            </button>
                        </div>
                    </div>
                </div>
            </header>

            <main class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8">
                {
                    if let Some(message) = &*accounts.error {
                        html! {
                            <div class="mb-6 p-4 bg-red-50 border border-red-200 rounded-lg">
                                <p class="text-sm text-red-600">{ message.clone() }</p>
                            </div>
                        }
                    } else {
                        html! {}
                    }
                }
                { content }
            </main>

            if *show_account_form {
                <AccountForm
                    account={(*editing_account).clone()}
                    on_save={on_save_account}
                    on_cancel={on_cancel_form}
                />
            }

            if *show_importer {
                <CsvImporter
                    on_close={on_importer_close}
                    on_import_success={on_import_success}
                />
            }
        </div>
    }
}

#[function_component(App)]
pub fn app() -> Html {
    let session = use_session();

    match *session.status {
        SessionStatus::Checking => html! {
            <div class="min-h-screen flex items-center justify-center bg-gray-50 text-gray-600">
                {"Verificando sessão..."}
            </div>
        },
        SessionStatus::Unauthenticated => {
            let on_authenticated = {
                let session = session.clone();
                Callback::from(move |auth| session.sign_in(auth))
            };
            html! { <AuthForm on_authenticated={on_authenticated} /> }
        }
        SessionStatus::Authenticated => html! { <MainApp session={session} /> },
    }
}
