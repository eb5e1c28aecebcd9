use web_sys::InputEvent;
use yew::prelude::*;

use crate::components::icons::*;
use crate::filter::AccountFilter;
use crate::models::{AccountKind, AccountStatus};

#[derive(Properties, PartialEq)]
pub struct FilterBarProps {
    pub filter: AccountFilter,
    pub on_change: Callback<AccountFilter>,
    pub on_add_click: Callback<()>,
    pub on_import_click: Callback<()>,
}

#[function_component(FilterBar)]
pub fn filter_bar(props: &FilterBarProps) -> Html {
    let on_search = {
        let filter = props.filter.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            on_change.emit(AccountFilter {
                search: input.value(),
                ..filter.clone()
            });
        })
    };

    let on_status = {
        let filter = props.filter.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            let select: web_sys::HtmlSelectElement = e.target_unchecked_into();
            on_change.emit(AccountFilter {
                status: AccountStatus::parse(&select.value()),
                ..filter.clone()
            });
        })
    };

    let on_kind = {
        let filter = props.filter.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            let select: web_sys::HtmlSelectElement = e.target_unchecked_into();
            on_change.emit(AccountFilter {
                kind: AccountKind::parse(&select.value()),
                ..filter.clone()
            });
        })
    };

    let on_add = {
        let on_add_click = props.on_add_click.clone();
        Callback::from(move |_| on_add_click.emit(()))
    };
    let on_import = {
        let on_import_click = props.on_import_click.clone();
        Callback::from(move |_| on_import_click.emit(()))
    };

    html! {
        <div class="bg-white rounded-xl p-6 shadow-sm border border-gray-100">
            <div class="flex flex-col lg:flex-row gap-4">
                <div class="flex-1">
                    <div class="relative">
                        <span class="absolute left-3 top-1/2 -translate-y-1/2 text-gray-400">{ icon_search() }</span>
                        <input
                            type="text"
                            placeholder="Buscar contas..."
                            value={props.filter.search.clone()}
                            oninput={on_search}
                            class="w-full pl-10 pr-4 py-2 border border-gray-300 rounded-lg focus:ring-2 focus:ring-blue-500 focus:border-transparent"
                        />
                    </div>
                </div>

                <div class="flex gap-3">
                    <div class="flex items-center gap-2">
                        <span class="text-gray-400">{ icon_filter() }</span>
                        <select
                            onchange={on_status}
                            class="px-3 py-2 border border-gray-300 rounded-lg focus:ring-2 focus:ring-blue-500 focus:border-transparent"
                        >
                            <option value="" selected={props.filter.status.is_none()}>{"Status"}</option>
                            { for [AccountStatus::Pending, AccountStatus::Paid, AccountStatus::Overdue].iter().map(|status| html! {
                                <option value={status.as_str()} selected={props.filter.status == Some(*status)}>{ status.label() }</option>
                            }) }
                        </select>
                    </div>

                    <select
                        onchange={on_kind}
                        class="px-3 py-2 border border-gray-300 rounded-lg focus:ring-2 focus:ring-blue-500 focus:border-transparent"
                    >
                        <option value="" selected={props.filter.kind.is_none()}>{"Tipo"}</option>
                        { for [AccountKind::Income, AccountKind::Expense].iter().map(|kind| html! {
                            <option value={kind.as_str()} selected={props.filter.kind == Some(*kind)}>{ kind.label() }</option>
                        }) }
                    </select>

                    <button
                        onclick={on_add}
                        class="bg-blue-600 text-white px-4 py-2 rounded-lg hover:bg-blue-700 transition-all duration-200 flex items-center gap-2 whitespace-nowrap"
                    >
                        { icon_plus() }
                        {"Nova Conta"}
                    </button>

                    <button
                        onclick={on_import}
                        class="bg-green-600 text-white px-4 py-2 rounded-lg hover:bg-green-700 transition-all duration-200 flex items-center gap-2 whitespace-nowrap"
                    >
                        { icon_upload() }
                        {"Importar CSV"}
                    </button>
                </div>
            </div>
        </div>
    }
}
