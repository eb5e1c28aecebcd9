use chrono::NaiveDate;
use yew::prelude::*;

use crate::components::icons::*;
use crate::format::format_brl;
use crate::models::Account;
use crate::reports::{build_monthly_report, MonthKey, MonthlyTable};

fn today() -> NaiveDate {
    let now = js_sys::Date::new_0();
    NaiveDate::from_ymd_opt(
        now.get_full_year() as i32,
        now.get_month() + 1,
        now.get_date(),
    )
    .unwrap_or_default()
}

fn data_table(
    title: &'static str,
    icon: Html,
    table: &MonthlyTable,
    months: &[MonthKey],
    is_income: bool,
) -> Html {
    let value_class = if is_income {
        "font-medium text-green-600"
    } else {
        "font-medium text-red-600"
    };
    let total_class = if is_income {
        "font-bold text-green-600"
    } else {
        "font-bold text-red-600"
    };

    if table.rows.is_empty() {
        let noun = if is_income { "receita" } else { "despesa" };
        let plural = if is_income { "receitas" } else { "despesas" };
        return html! {
            <div class="bg-white rounded-xl p-8 text-center shadow-sm border border-gray-100">
                <div class="flex justify-center text-gray-300 mb-4">{ icon }</div>
                <h3 class="text-lg font-medium text-gray-900 mb-2">{ format!("Nenhuma {} encontrada", noun) }</h3>
                <p class="text-gray-500">{ format!("Não há {} registradas nos últimos três meses.", plural) }</p>
            </div>
        };
    }

    html! {
        <div class="bg-white rounded-xl shadow-sm border border-gray-100 overflow-hidden">
            <div class="px-6 py-4 bg-gray-50 border-b border-gray-200">
                <div class="flex items-center gap-2">
                    { icon }
                    <h3 class="text-lg font-semibold text-gray-900">{ title }</h3>
                </div>
            </div>

            <div class="overflow-x-auto">
                <table class="w-full">
                    <thead class="bg-gray-50">
                        <tr>
                            <th class="px-6 py-4 text-left text-sm font-semibold text-gray-900 border-b border-gray-200">{"Descrição"}</th>
                            { for months.iter().map(|month| html! {
                                <th class="px-4 py-4 text-center text-sm font-semibold text-gray-900 border-b border-gray-200 min-w-[120px]">
                                    { month.label() }
                                </th>
                            }) }
                            <th class="px-6 py-4 text-center text-sm font-semibold text-gray-900 border-b border-gray-200">{"Total"}</th>
                        </tr>
                    </thead>
                    <tbody class="divide-y divide-gray-100">
                        { for table.rows.iter().enumerate().map(|(index, row)| html! {
                            <tr key={row.description.clone()} class={if index % 2 == 0 { "bg-white" } else { "bg-gray-50/50" }}>
                                <td class="px-6 py-4 text-sm font-medium text-gray-900">{ &row.description }</td>
                                { for row.by_month.iter().map(|value| html! {
                                    <td class="px-4 py-4 text-center text-sm">
                                        { if *value > 0.0 {
                                            html! { <span class={value_class}>{ format_brl(*value) }</span> }
                                        } else {
                                            html! { <span class="text-gray-300">{"-"}</span> }
                                        }}
                                    </td>
                                }) }
                                <td class="px-6 py-4 text-center text-sm font-semibold">
                                    <span class={value_class}>{ format_brl(row.total) }</span>
                                </td>
                            </tr>
                        }) }
                    </tbody>
                    <tfoot class="bg-gray-100">
                        <tr>
                            <td class="px-6 py-4 text-sm font-bold text-gray-900">{"Total por Mês"}</td>
                            { for table.month_totals.iter().map(|total| html! {
                                <td class="px-4 py-4 text-center text-sm">
                                    <span class={total_class}>{ format_brl(*total) }</span>
                                </td>
                            }) }
                            <td class="px-6 py-4 text-center text-sm">
                                <span class={total_class}>{ format_brl(table.grand_total) }</span>
                            </td>
                        </tr>
                    </tfoot>
                </table>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct MonthlyReportProps {
    pub accounts: Vec<Account>,
}

#[function_component(MonthlyReport)]
pub fn monthly_report(props: &MonthlyReportProps) -> Html {
    let report = build_monthly_report(&props.accounts, today());
    let balance_class = |value: f64| {
        if value >= 0.0 {
            "text-green-600"
        } else {
            "text-red-600"
        }
    };

    html! {
        <div class="space-y-8">
            <div class="grid grid-cols-1 md:grid-cols-4 gap-4">
                <div class="bg-white rounded-lg p-4 shadow-sm border border-gray-100">
                    <div class="flex items-center gap-3">
                        <div class="p-2 bg-green-100 rounded-lg text-green-600">{ icon_trending_up() }</div>
                        <div>
                            <p class="text-sm text-gray-600">{"Total Receitas"}</p>
                            <p class="text-xl font-bold text-green-600">{ format_brl(report.income.grand_total) }</p>
                        </div>
                    </div>
                </div>
                <div class="bg-white rounded-lg p-4 shadow-sm border border-gray-100">
                    <div class="flex items-center gap-3">
                        <div class="p-2 bg-red-100 rounded-lg text-red-600">{ icon_trending_down() }</div>
                        <div>
                            <p class="text-sm text-gray-600">{"Total Despesas"}</p>
                            <p class="text-xl font-bold text-red-600">{ format_brl(report.expense.grand_total) }</p>
                        </div>
                    </div>
                </div>
                <div class="bg-white rounded-lg p-4 shadow-sm border border-gray-100">
                    <div class="flex items-center gap-3">
                        <div class={classes!("p-2", "rounded-lg", if report.total_balance >= 0.0 { "bg-green-100 text-green-600" } else { "bg-red-100 text-red-600" })}>
                            { icon_dollar_sign() }
                        </div>
                        <div>
                            <p class="text-sm text-gray-600">{"Saldo Total"}</p>
                            <p class={classes!("text-xl", "font-bold", balance_class(report.total_balance))}>
                                { format_brl(report.total_balance) }
                            </p>
                        </div>
                    </div>
                </div>
                <div class="bg-white rounded-lg p-4 shadow-sm border border-gray-100">
                    <div class="flex items-center gap-3">
                        <div class="p-2 bg-blue-100 rounded-lg text-blue-600">{ icon_calendar() }</div>
                        <div>
                            <p class="text-sm text-gray-600">{"Contas Únicas"}</p>
                            <p class="text-xl font-bold text-gray-900">{ report.unique_descriptions }</p>
                        </div>
                    </div>
                </div>
            </div>

            <div class="bg-white rounded-xl shadow-sm border border-gray-100 overflow-hidden">
                <div class="px-6 py-4 bg-gray-50 border-b border-gray-200">
                    <div class="flex items-center gap-2 text-blue-600">
                        { icon_dollar_sign() }
                        <h3 class="text-lg font-semibold text-gray-900">{"Saldo Mensal"}</h3>
                    </div>
                </div>
                <div class="overflow-x-auto">
                    <table class="w-full">
                        <thead class="bg-gray-50">
                            <tr>
                                <th class="px-6 py-4 text-left text-sm font-semibold text-gray-900 border-b border-gray-200">{"Tipo"}</th>
                                { for report.months.iter().map(|month| html! {
                                    <th class="px-4 py-4 text-center text-sm font-semibold text-gray-900 border-b border-gray-200 min-w-[120px]">
                                        { month.label() }
                                    </th>
                                }) }
                                <th class="px-6 py-4 text-center text-sm font-semibold text-gray-900 border-b border-gray-200">{"Total"}</th>
                            </tr>
                        </thead>
                        <tbody class="divide-y divide-gray-100">
                            <tr class="bg-white">
                                <td class="px-6 py-4 text-sm font-medium text-green-600">{"Receitas"}</td>
                                { for report.income.month_totals.iter().map(|total| html! {
                                    <td class="px-4 py-4 text-center text-sm font-medium text-green-600">{ format_brl(*total) }</td>
                                }) }
                                <td class="px-6 py-4 text-center text-sm font-bold text-green-600">{ format_brl(report.income.grand_total) }</td>
                            </tr>
                            <tr class="bg-gray-50/50">
                                <td class="px-6 py-4 text-sm font-medium text-red-600">{"Despesas"}</td>
                                { for report.expense.month_totals.iter().map(|total| html! {
                                    <td class="px-4 py-4 text-center text-sm font-medium text-red-600">{ format_brl(*total) }</td>
                                }) }
                                <td class="px-6 py-4 text-center text-sm font-bold text-red-600">{ format_brl(report.expense.grand_total) }</td>
                            </tr>
                        </tbody>
                        <tfoot class="bg-blue-50">
                            <tr>
                                <td class="px-6 py-4 text-sm font-bold text-gray-900">{"Saldo"}</td>
                                { for report.balance_by_month.iter().map(|balance| html! {
                                    <td class="px-4 py-4 text-center text-sm font-bold">
                                        <span class={balance_class(*balance)}>{ format_brl(*balance) }</span>
                                    </td>
                                }) }
                                <td class="px-6 py-4 text-center text-sm font-bold">
                                    <span class={balance_class(report.total_balance)}>{ format_brl(report.total_balance) }</span>
                                </td>
                            </tr>
                        </tfoot>
                    </table>
                </div>
            </div>

            { data_table("Receitas", icon_trending_up(), &report.income, &report.months, true) }
            { data_table("Despesas", icon_trending_down(), &report.expense, &report.months, false) }
        </div>
    }
}
