use std::collections::HashMap;

use gloo_console::error;
use wasm_bindgen::JsCast;
use web_sys::InputEvent;
use yew::prelude::*;

use crate::components::icons::*;
use crate::format::{format_brl, format_date_br};
use crate::models::{Account, AccountKind};
use crate::reports::{clamp_people, share_of, sharing_totals, DEFAULT_PEOPLE, MAX_PEOPLE, MIN_PEOPLE};

fn export_csv(selected: &[(Account, u32)]) -> Option<String> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(b';')
        .from_writer(Vec::new());
    writer
        .write_record(["Descrição", "Categoria", "Data", "Pessoas", "Valor Total", "Sua Parte"])
        .ok()?;
    for (account, people) in selected {
        writer
            .write_record([
                account.description.clone(),
                account.category.clone(),
                format_date_br(&account.due_date),
                people.to_string(),
                format_brl(account.value),
                format_brl(share_of(account.value, *people)),
            ])
            .ok()?;
    }
    let totals = sharing_totals(selected);
    writer
        .write_record([
            format!("Total ({} contas)", totals.accounts_count),
            String::new(),
            String::new(),
            String::new(),
            format_brl(totals.total_value),
            format_brl(totals.total_share),
        ])
        .ok()?;
    String::from_utf8(writer.into_inner().ok()?).ok()
}

fn download_file(filename: &str, content: &str) -> Option<()> {
    let parts = js_sys::Array::new();
    parts.push(&wasm_bindgen::JsValue::from_str(content));
    let mut options = web_sys::BlobPropertyBag::new();
    options.type_("text/csv;charset=utf-8;");
    let blob = web_sys::Blob::new_with_str_sequence_and_options(&parts, &options).ok()?;
    let url = web_sys::Url::create_object_url_with_blob(&blob).ok()?;

    let document = web_sys::window()?.document()?;
    let anchor: web_sys::HtmlAnchorElement =
        document.create_element("a").ok()?.dyn_into().ok()?;
    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor.click();
    let _ = web_sys::Url::revoke_object_url(&url);
    Some(())
}

#[derive(Properties, PartialEq)]
pub struct ExpenseSharingProps {
    pub accounts: Vec<Account>,
}

#[function_component(ExpenseSharing)]
pub fn expense_sharing(props: &ExpenseSharingProps) -> Html {
    // account id -> head count
    let selected = use_state(HashMap::<String, u32>::new);

    let expense_accounts: Vec<Account> = props
        .accounts
        .iter()
        .filter(|account| account.kind == AccountKind::Expense)
        .cloned()
        .collect();

    let selected_accounts: Vec<(Account, u32)> = expense_accounts
        .iter()
        .filter_map(|account| {
            selected
                .get(&account.id)
                .map(|people| (account.clone(), *people))
        })
        .collect();
    let totals = sharing_totals(&selected_accounts);

    let on_clear = {
        let selected = selected.clone();
        Callback::from(move |_| selected.set(HashMap::new()))
    };

    let on_download = {
        let selected_accounts = selected_accounts.clone();
        Callback::from(move |_| {
            let Some(content) = export_csv(&selected_accounts) else {
                error!("falha ao montar o CSV da divisão");
                return;
            };
            let now = js_sys::Date::new_0();
            let filename = format!(
                "divisao-contas-{:04}-{:02}-{:02}.csv",
                now.get_full_year(),
                now.get_month() + 1,
                now.get_date()
            );
            if download_file(&filename, &content).is_none() {
                error!("falha ao baixar o CSV da divisão");
            }
        })
    };

    if expense_accounts.is_empty() {
        return html! {
            <div class="bg-white rounded-xl p-8 text-center shadow-sm border border-gray-100">
                <div class="flex justify-center text-gray-300 mb-4">{ icon_users() }</div>
                <h3 class="text-lg font-medium text-gray-900 mb-2">{"Nenhuma despesa encontrada"}</h3>
                <p class="text-gray-500">{"Adicione algumas despesas para usar o relatório de divisão de contas."}</p>
            </div>
        };
    }

    html! {
        <div class="space-y-6">
            <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                <div class="bg-white rounded-lg p-4 shadow-sm border border-gray-100">
                    <div class="flex items-center gap-3">
                        <div class="p-2 bg-blue-100 rounded-lg text-blue-600">{ icon_calculator() }</div>
                        <div>
                            <p class="text-sm text-gray-600">{"Contas Selecionadas"}</p>
                            <p class="text-xl font-bold text-gray-900">{ totals.accounts_count }</p>
                        </div>
                    </div>
                </div>
                <div class="bg-white rounded-lg p-4 shadow-sm border border-gray-100">
                    <div class="flex items-center gap-3">
                        <div class="p-2 bg-red-100 rounded-lg text-red-600">{ icon_dollar_sign() }</div>
                        <div>
                            <p class="text-sm text-gray-600">{"Valor Total"}</p>
                            <p class="text-xl font-bold text-red-600">{ format_brl(totals.total_value) }</p>
                        </div>
                    </div>
                </div>
                <div class="bg-white rounded-lg p-4 shadow-sm border border-gray-100">
                    <div class="flex items-center gap-3">
                        <div class="p-2 bg-green-100 rounded-lg text-green-600">{ icon_users() }</div>
                        <div>
                            <p class="text-sm text-gray-600">{"Sua Parte"}</p>
                            <p class="text-xl font-bold text-green-600">{ format_brl(totals.total_share) }</p>
                        </div>
                    </div>
                </div>
            </div>

            <div class="bg-white rounded-xl shadow-sm border border-gray-100">
                <div class="px-6 py-4 bg-gray-50 border-b border-gray-200">
                    <div class="flex items-center justify-between">
                        <div class="flex items-center gap-2 text-blue-600">
                            { icon_users() }
                            <h3 class="text-lg font-semibold text-gray-900">{"Selecionar Despesas para Divisão"}</h3>
                        </div>
                        if !selected.is_empty() {
                            <div class="flex gap-2">
                                <button
                                    onclick={on_download}
                                    class="text-sm bg-green-600 text-white px-3 py-1 rounded hover:bg-green-700 flex items-center gap-1"
                                >
                                    { icon_download() }
                                    {"Baixar CSV"}
                                </button>
                                <button onclick={on_clear} class="text-sm text-red-600 hover:text-red-700 font-medium">
                                    {"Limpar Seleção"}
                                </button>
                            </div>
                        }
                    </div>
                </div>

                <div class="p-6">
                    <div class="space-y-2 max-h-80 overflow-y-auto">
                        { for expense_accounts.iter().map(|account| {
                            let is_selected = selected.contains_key(&account.id);
                            let people = selected.get(&account.id).copied().unwrap_or(DEFAULT_PEOPLE);

                            let on_toggle = {
                                let selected = selected.clone();
                                let id = account.id.clone();
                                Callback::from(move |_| {
                                    let mut next = (*selected).clone();
                                    if next.remove(&id).is_none() {
                                        next.insert(id.clone(), DEFAULT_PEOPLE);
                                    }
                                    selected.set(next);
                                })
                            };
                            let on_people = {
                                let selected = selected.clone();
                                let id = account.id.clone();
                                Callback::from(move |e: InputEvent| {
                                    let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                                    let people = clamp_people(input.value().parse().unwrap_or(MIN_PEOPLE));
                                    let mut next = (*selected).clone();
                                    next.insert(id.clone(), people);
                                    selected.set(next);
                                })
                            };

                            html! {
                                <div
                                    key={account.id.clone()}
                                    class={if is_selected {
                                        "border rounded-lg p-3 transition-all duration-200 border-blue-300 bg-blue-50"
                                    } else {
                                        "border rounded-lg p-3 transition-all duration-200 border-gray-200 hover:border-gray-300"
                                    }}
                                >
                                    <div class="flex items-center justify-between">
                                        <div class="flex items-center gap-3">
                                            <button
                                                onclick={on_toggle}
                                                class={if is_selected {
                                                    "w-5 h-5 rounded border-2 flex items-center justify-center bg-blue-600 border-blue-600 text-white"
                                                } else {
                                                    "w-5 h-5 rounded border-2 flex items-center justify-center border-gray-300 hover:border-blue-400"
                                                }}
                                            >
                                                { if is_selected { icon_check() } else { html!{} } }
                                            </button>
                                            <div>
                                                <h4 class="font-medium text-gray-900 text-sm">{ &account.description }</h4>
                                                <div class="flex items-center gap-3 text-xs text-gray-500">
                                                    <span>{ &account.category }</span>
                                                    <span>{ format_date_br(&account.due_date) }</span>
                                                    <span class="font-medium text-red-600">{ format_brl(account.value) }</span>
                                                </div>
                                            </div>
                                        </div>

                                        if is_selected {
                                            <div class="flex items-center gap-2 text-sm">
                                                <label class="font-medium text-gray-700">{"Dividir entre:"}</label>
                                                <input
                                                    type="number"
                                                    min={MIN_PEOPLE.to_string()}
                                                    max={MAX_PEOPLE.to_string()}
                                                    value={people.to_string()}
                                                    oninput={on_people}
                                                    class="w-12 px-1 py-1 border border-gray-300 rounded text-center text-xs"
                                                />
                                                <span class="text-xs text-gray-500">{"pessoas"}</span>
                                            </div>
                                        }
                                    </div>
                                </div>
                            }
                        }) }
                    </div>
                </div>
            </div>

            if !selected_accounts.is_empty() {
                <div class="bg-white rounded-xl shadow-sm border border-gray-100 overflow-hidden">
                    <div class="px-6 py-4 bg-gray-50 border-b border-gray-200">
                        <div class="flex items-center gap-2 text-green-600">
                            { icon_calculator() }
                            <h3 class="text-lg font-semibold text-gray-900">{"Resultado da Divisão"}</h3>
                        </div>
                    </div>

                    <div class="overflow-x-auto">
                        <table class="w-full text-sm">
                            <thead class="bg-gray-50">
                                <tr>
                                    <th class="px-4 py-3 text-left text-xs font-semibold text-gray-900 border-b border-gray-200">{"Descrição"}</th>
                                    <th class="px-3 py-3 text-center text-xs font-semibold text-gray-900 border-b border-gray-200">{"Data"}</th>
                                    <th class="px-3 py-3 text-center text-xs font-semibold text-gray-900 border-b border-gray-200">{"Pessoas"}</th>
                                    <th class="px-3 py-3 text-center text-xs font-semibold text-gray-900 border-b border-gray-200">{"Valor Total"}</th>
                                    <th class="px-3 py-3 text-center text-xs font-semibold text-gray-900 border-b border-gray-200">{"Sua Parte"}</th>
                                </tr>
                            </thead>
                            <tbody class="divide-y divide-gray-100">
                                { for selected_accounts.iter().enumerate().map(|(index, (account, people))| html! {
                                    <tr key={account.id.clone()} class={if index % 2 == 0 { "bg-white" } else { "bg-gray-50/50" }}>
                                        <td class="px-4 py-3 text-xs font-medium text-gray-900">
                                            <div class="font-medium">{ &account.description }</div>
                                            <div class="text-xs text-gray-500 mt-1">{ &account.category }</div>
                                        </td>
                                        <td class="px-3 py-3 text-center text-xs text-gray-600">{ format_date_br(&account.due_date) }</td>
                                        <td class="px-3 py-3 text-center text-xs font-medium text-blue-600">{ *people }</td>
                                        <td class="px-3 py-3 text-center text-xs font-medium text-red-600">{ format_brl(account.value) }</td>
                                        <td class="px-3 py-3 text-center text-xs font-medium text-green-600">{ format_brl(share_of(account.value, *people)) }</td>
                                    </tr>
                                }) }
                            </tbody>
                            <tfoot class="bg-gray-100">
                                <tr>
                                    <td colspan="3" class="px-4 py-3 text-xs font-bold text-gray-900">
                                        { format!("Total ({} contas)", totals.accounts_count) }
                                    </td>
                                    <td class="px-3 py-3 text-center text-xs font-bold text-red-600">{ format_brl(totals.total_value) }</td>
                                    <td class="px-3 py-3 text-center text-xs font-bold text-green-600">{ format_brl(totals.total_share) }</td>
                                </tr>
                            </tfoot>
                        </table>
                    </div>
                </div>
            }
        </div>
    }
}
