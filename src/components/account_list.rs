use yew::prelude::*;

use crate::components::icons::*;
use crate::format::{format_brl, format_date_br};
use crate::models::{Account, AccountKind, AccountStatus};

#[derive(Properties, PartialEq)]
pub struct AccountListProps {
    pub accounts: Vec<Account>,
    pub on_edit: Callback<Account>,
    pub on_delete: Callback<String>,
}

fn status_class(status: AccountStatus) -> &'static str {
    match status {
        AccountStatus::Paid => "bg-green-100 text-green-800 border border-green-200",
        AccountStatus::Pending => "bg-yellow-100 text-yellow-800 border border-yellow-200",
        AccountStatus::Overdue => "bg-red-100 text-red-800 border border-red-200",
    }
}

#[function_component(AccountList)]
pub fn account_list(props: &AccountListProps) -> Html {
    if props.accounts.is_empty() {
        return html! {
            <div class="bg-white rounded-xl p-8 text-center shadow-sm border border-gray-100">
                <div class="flex justify-center text-gray-300 mb-4">{ icon_dollar_sign() }</div>
                <h3 class="text-lg font-medium text-gray-900 mb-2">{"Nenhuma conta encontrada"}</h3>
                <p class="text-gray-500">{"Adicione sua primeira conta para começar o controle financeiro."}</p>
            </div>
        };
    }

    html! {
        <div class="space-y-3">
            { for props.accounts.iter().map(|account| {
                let signed_amount = if account.kind == AccountKind::Income {
                    format!("+ {}", format_brl(account.value))
                } else {
                    format!("- {}", format_brl(account.value))
                };
                let amount_class = if account.kind == AccountKind::Income {
                    "font-medium text-green-600"
                } else {
                    "font-medium text-red-600"
                };

                let on_edit = {
                    let on_edit = props.on_edit.clone();
                    let account = account.clone();
                    Callback::from(move |_| on_edit.emit(account.clone()))
                };
                let on_delete = {
                    let on_delete = props.on_delete.clone();
                    let id = account.id.clone();
                    Callback::from(move |_| on_delete.emit(id.clone()))
                };

                html! {
                    <div key={account.id.clone()} class="bg-white rounded-lg p-4 shadow-sm border border-gray-100 hover:shadow-md transition-all duration-200">
                        <div class="flex items-center justify-between">
                            <div class="flex-1">
                                <div class="flex items-center gap-2 mb-1">
                                    <h3 class="text-base font-semibold text-gray-900 truncate">{ &account.description }</h3>
                                    {
                                        if let Some(card) = &account.credit_card {
                                            html! {
                                                <div class="flex items-center gap-1 text-blue-500">
                                                    { icon_credit_card() }
                                                    <span class="text-xs text-blue-600 font-medium">{ card.clone() }</span>
                                                </div>
                                            }
                                        } else {
                                            html! {}
                                        }
                                    }
                                    <span class={classes!("px-2", "py-1", "rounded-full", "text-xs", "font-medium", status_class(account.status))}>
                                        { account.status.label() }
                                    </span>
                                </div>
                                <div class="flex items-center gap-4 text-sm text-gray-500">
                                    <span class="text-xs text-gray-600">{ &account.category }</span>
                                    <div class="flex items-center gap-1">
                                        { icon_calendar() }
                                        <span>{ format_date_br(&account.due_date) }</span>
                                    </div>
                                    <span class={amount_class}>{ signed_amount }</span>
                                </div>
                            </div>
                            <div class="flex gap-1 ml-4">
                                <button
                                    onclick={on_edit}
                                    title="Editar conta"
                                    class="p-2 text-gray-400 hover:text-blue-600 hover:bg-blue-50 rounded-md transition-all duration-200"
                                >
                                    { icon_edit() }
                                </button>
                                <button
                                    onclick={on_delete}
                                    title="Excluir conta"
                                    class="p-2 text-gray-400 hover:text-red-600 hover:bg-red-50 rounded-md transition-all duration-200"
                                >
                                    { icon_trash() }
                                </button>
                            </div>
                        </div>
                    </div>
                }
            }) }
        </div>
    }
}
