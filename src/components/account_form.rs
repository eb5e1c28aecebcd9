use web_sys::InputEvent;
use yew::prelude::*;

use crate::components::icons::*;
use crate::models::{Account, AccountDraft, AccountKind, AccountStatus};

const CREDIT_CARDS: [&str; 7] = [
    "Nubank Roxinho",
    "Itaú Click",
    "Bradesco Elo",
    "Santander SX",
    "C6 Bank",
    "Inter Gold",
    "XP Visa Infinite",
];

#[derive(Properties, PartialEq)]
pub struct AccountFormProps {
    /// When present the form edits an existing account.
    pub account: Option<Account>,
    pub on_save: Callback<AccountDraft>,
    pub on_cancel: Callback<()>,
}

#[function_component(AccountForm)]
pub fn account_form(props: &AccountFormProps) -> Html {
    let editing = props.account.is_some();
    let source = props.account.clone();

    let description = use_state(|| source.as_ref().map(|a| a.description.clone()).unwrap_or_default());
    let value = use_state(|| {
        source
            .as_ref()
            .map(|a| a.value.to_string())
            .unwrap_or_default()
    });
    let due_date = use_state(|| source.as_ref().map(|a| a.due_date.clone()).unwrap_or_default());
    let status = use_state(|| source.as_ref().map(|a| a.status).unwrap_or(AccountStatus::Pending));
    let category = use_state(|| source.as_ref().map(|a| a.category.clone()).unwrap_or_default());
    let kind = use_state(|| source.as_ref().map(|a| a.kind).unwrap_or(AccountKind::Expense));
    let credit_card = use_state(|| {
        source
            .as_ref()
            .and_then(|a| a.credit_card.clone())
            .unwrap_or_default()
    });
    let is_recurring = use_state(|| false);
    let recurring_months = use_state(|| "2".to_string());
    let form_error = use_state(|| None::<String>);

    let on_submit = {
        let description = description.clone();
        let value = value.clone();
        let due_date = due_date.clone();
        let status = status.clone();
        let category = category.clone();
        let kind = kind.clone();
        let credit_card = credit_card.clone();
        let is_recurring = is_recurring.clone();
        let recurring_months = recurring_months.clone();
        let form_error = form_error.clone();
        let on_save = props.on_save.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let description_val = description.trim().to_string();
            let category_val = category.trim().to_string();
            let due_date_val = due_date.trim().to_string();
            let value_val = value.trim().parse::<f64>().unwrap_or(0.0);

            if description_val.is_empty() || category_val.is_empty() || due_date_val.is_empty() {
                form_error.set(Some(
                    "Por favor, preencha todos os campos obrigatórios".to_string(),
                ));
                return;
            }
            if value_val <= 0.0 {
                form_error.set(Some("O valor deve ser maior que zero".to_string()));
                return;
            }

            let months = recurring_months.trim().parse::<u32>().unwrap_or(0);
            if !editing && *is_recurring && !(2..=12).contains(&months) {
                form_error.set(Some(
                    "A recorrência deve ter entre 2 e 12 meses".to_string(),
                ));
                return;
            }
            form_error.set(None);

            let card = credit_card.trim().to_string();
            on_save.emit(AccountDraft {
                description: description_val,
                value: value_val,
                due_date: due_date_val,
                status: *status,
                category: category_val,
                kind: *kind,
                credit_card: if card.is_empty() { None } else { Some(card) },
                is_recurring: (!editing && *is_recurring).then_some(true),
                recurring_months: (!editing && *is_recurring).then_some(months),
            });
        })
    };

    let on_cancel = {
        let on_cancel = props.on_cancel.clone();
        Callback::from(move |_| on_cancel.emit(()))
    };

    html! {
        <div class="fixed inset-0 bg-black bg-opacity-50 flex items-center justify-center p-4 z-50">
            <div class="bg-white rounded-xl max-w-md w-full max-h-[90vh] overflow-y-auto">
                <div class="p-6">
                    <div class="flex items-center justify-between mb-6">
                        <h2 class="text-xl font-bold text-gray-900">
                            { if editing { "Editar Conta" } else { "Nova Conta" } }
                        </h2>
                        <button onclick={on_cancel.clone()} class="p-2 hover:bg-gray-100 rounded-lg transition-colors duration-200">
                            { icon_x() }
                        </button>
                    </div>

                    <form class="space-y-4" onsubmit={on_submit}>
                        <div>
                            <label class="block text-sm font-medium text-gray-700 mb-2">{"Descrição *"}</label>
                            <textarea
                                rows="3"
                                placeholder="Descrição da conta"
                                class="w-full px-3 py-2 border border-gray-300 rounded-lg focus:ring-2 focus:ring-blue-500 focus:border-transparent"
                                value={(*description).clone()}
                                oninput={{
                                    let description = description.clone();
                                    Callback::from(move |e: InputEvent| {
                                        let input: web_sys::HtmlTextAreaElement = e.target_unchecked_into();
                                        description.set(input.value());
                                    })
                                }}
                            />
                        </div>

                        <div class="grid grid-cols-2 gap-4">
                            <div>
                                <label class="block text-sm font-medium text-gray-700 mb-2">{"Tipo *"}</label>
                                <select
                                    class="w-full px-3 py-2 border border-gray-300 rounded-lg focus:ring-2 focus:ring-blue-500 focus:border-transparent"
                                    onchange={{
                                        let kind = kind.clone();
                                        Callback::from(move |e: Event| {
                                            let select: web_sys::HtmlSelectElement = e.target_unchecked_into();
                                            if let Some(parsed) = AccountKind::parse(&select.value()) {
                                                kind.set(parsed);
                                            }
                                        })
                                    }}
                                >
                                    <option value="expense" selected={*kind == AccountKind::Expense}>{"Despesa"}</option>
                                    <option value="income" selected={*kind == AccountKind::Income}>{"Receita"}</option>
                                </select>
                            </div>

                            <div>
                                <label class="block text-sm font-medium text-gray-700 mb-2">{"Valor *"}</label>
                                <input
                                    type="number"
                                    step="0.01"
                                    min="0"
                                    placeholder="0,00"
                                    class="w-full px-3 py-2 border border-gray-300 rounded-lg focus:ring-2 focus:ring-blue-500 focus:border-transparent"
                                    value={(*value).clone()}
                                    oninput={{
                                        let value = value.clone();
                                        Callback::from(move |e: InputEvent| {
                                            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                                            value.set(input.value());
                                        })
                                    }}
                                />
                            </div>
                        </div>

                        <div class="grid grid-cols-2 gap-4">
                            <div>
                                <label class="block text-sm font-medium text-gray-700 mb-2">{"Data de Vencimento *"}</label>
                                <input
                                    type="date"
                                    class="w-full px-3 py-2 border border-gray-300 rounded-lg focus:ring-2 focus:ring-blue-500 focus:border-transparent"
                                    value={(*due_date).clone()}
                                    oninput={{
                                        let due_date = due_date.clone();
                                        Callback::from(move |e: InputEvent| {
                                            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                                            due_date.set(input.value());
                                        })
                                    }}
                                />
                            </div>

                            <div>
                                <label class="block text-sm font-medium text-gray-700 mb-2">{"Status"}</label>
                                <select
                                    class="w-full px-3 py-2 border border-gray-300 rounded-lg focus:ring-2 focus:ring-blue-500 focus:border-transparent"
                                    onchange={{
                                        let status = status.clone();
                                        Callback::from(move |e: Event| {
                                            let select: web_sys::HtmlSelectElement = e.target_unchecked_into();
                                            if let Some(parsed) = AccountStatus::parse(&select.value()) {
                                                status.set(parsed);
                                            }
                                        })
                                    }}
                                >
                                    { for [AccountStatus::Pending, AccountStatus::Paid, AccountStatus::Overdue].iter().map(|option| html! {
                                        <option value={option.as_str()} selected={*status == *option}>{ option.label() }</option>
                                    }) }
                                </select>
                            </div>
                        </div>

                        <div>
                            <label class="block text-sm font-medium text-gray-700 mb-2">{"Categoria *"}</label>
                            <input
                                type="text"
                                placeholder="Ex: Alimentação, Moradia, Salário"
                                class="w-full px-3 py-2 border border-gray-300 rounded-lg focus:ring-2 focus:ring-blue-500 focus:border-transparent"
                                value={(*category).clone()}
                                oninput={{
                                    let category = category.clone();
                                    Callback::from(move |e: InputEvent| {
                                        let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                                        category.set(input.value());
                                    })
                                }}
                            />
                        </div>

                        <div>
                            <label class="block text-sm font-medium text-gray-700 mb-2">{"Cartão de Crédito"}</label>
                            <select
                                class="w-full px-3 py-2 border border-gray-300 rounded-lg focus:ring-2 focus:ring-blue-500 focus:border-transparent"
                                onchange={{
                                    let credit_card = credit_card.clone();
                                    Callback::from(move |e: Event| {
                                        let select: web_sys::HtmlSelectElement = e.target_unchecked_into();
                                        credit_card.set(select.value());
                                    })
                                }}
                            >
                                <option value="" selected={credit_card.is_empty()}>{"Nenhum cartão"}</option>
                                { for CREDIT_CARDS.iter().map(|card| html! {
                                    <option value={*card} selected={*credit_card == *card}>{ *card }</option>
                                }) }
                            </select>
                        </div>

                        if !editing {
                            <div class="flex items-center gap-3">
                                <input
                                    type="checkbox"
                                    checked={*is_recurring}
                                    onclick={{
                                        let is_recurring = is_recurring.clone();
                                        Callback::from(move |_| is_recurring.set(!*is_recurring))
                                    }}
                                />
                                <label class="text-sm text-gray-700">{"Conta recorrente"}</label>
                                if *is_recurring {
                                    <input
                                        type="number"
                                        min="2"
                                        max="12"
                                        class="w-16 px-2 py-1 border border-gray-300 rounded text-center text-sm"
                                        value={(*recurring_months).clone()}
                                        oninput={{
                                            let recurring_months = recurring_months.clone();
                                            Callback::from(move |e: InputEvent| {
                                                let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                                                recurring_months.set(input.value());
                                            })
                                        }}
                                    />
                                    <span class="text-xs text-gray-500">{"meses"}</span>
                                }
                            </div>
                        }

                        {
                            if let Some(msg) = &*form_error {
                                html! { <p class="text-sm text-red-500">{ msg.clone() }</p> }
                            } else {
                                html! {}
                            }
                        }

                        <div class="flex gap-3 pt-4">
                            <button
                                type="submit"
                                class="flex-1 bg-blue-600 text-white px-4 py-2 rounded-lg hover:bg-blue-700 transition-all duration-200 flex items-center justify-center gap-2"
                            >
                                { icon_save() }
                                {"Salvar"}
                            </button>
                            <button
                                type="button"
                                onclick={on_cancel}
                                class="flex-1 bg-gray-100 text-gray-700 px-4 py-2 rounded-lg hover:bg-gray-200 transition-all duration-200"
                            >
                                {"Cancelar"}
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </div>
    }
}
