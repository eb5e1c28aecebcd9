use yew::prelude::*;

use crate::components::icons::*;
use crate::format::format_brl;
use crate::models::Account;
use crate::reports::dashboard_stats;

#[derive(Clone, Copy, PartialEq)]
enum Trend {
    Up,
    Down,
    Neutral,
}

#[derive(Properties, PartialEq)]
struct StatCardProps {
    title: &'static str,
    value: String,
    icon: Html,
    trend: Trend,
    accent: &'static str,
}

#[function_component(StatCard)]
fn stat_card(props: &StatCardProps) -> Html {
    let icon_class = match props.trend {
        Trend::Up => "p-3 rounded-lg bg-green-100 text-green-600",
        Trend::Down => "p-3 rounded-lg bg-red-100 text-red-600",
        Trend::Neutral => "p-3 rounded-lg bg-blue-100 text-blue-600",
    };
    html! {
        <div class={classes!("bg-white", "rounded-xl", "p-6", "shadow-sm", "border", "border-gray-100", "hover:shadow-md", "transition-all", "duration-200", "border-l-4", props.accent)}>
            <div class="flex items-center justify-between">
                <div>
                    <p class="text-sm font-medium text-gray-600 mb-1">{ props.title }</p>
                    <p class="text-2xl font-bold text-gray-900">{ props.value.clone() }</p>
                </div>
                <div class={icon_class}>{ props.icon.clone() }</div>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct DashboardProps {
    pub accounts: Vec<Account>,
}

#[function_component(Dashboard)]
pub fn dashboard(props: &DashboardProps) -> Html {
    let stats = dashboard_stats(&props.accounts);
    let balance_positive = stats.balance >= 0.0;

    html! {
        <div class="space-y-6">
            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                <StatCard
                    title="Receitas"
                    value={format_brl(stats.total_income)}
                    icon={icon_trending_up()}
                    trend={Trend::Up}
                    accent="border-l-green-500"
                />
                <StatCard
                    title="Despesas"
                    value={format_brl(stats.total_expenses)}
                    icon={icon_trending_down()}
                    trend={Trend::Down}
                    accent="border-l-red-500"
                />
                <StatCard
                    title="Saldo"
                    value={format_brl(stats.balance)}
                    icon={icon_dollar_sign()}
                    trend={if balance_positive { Trend::Up } else { Trend::Down }}
                    accent={if balance_positive { "border-l-green-500" } else { "border-l-red-500" }}
                />
            </div>

            <div class="grid grid-cols-1 md:grid-cols-3 gap-6">
                <StatCard
                    title="Contas Pendentes"
                    value={stats.pending_accounts.to_string()}
                    icon={icon_clock()}
                    trend={Trend::Neutral}
                    accent="border-l-yellow-500"
                />
                <StatCard
                    title="Contas Vencidas"
                    value={stats.overdue_accounts.to_string()}
                    icon={icon_alert_triangle()}
                    trend={Trend::Down}
                    accent="border-l-red-500"
                />
                <StatCard
                    title="Contas Pagas"
                    value={stats.paid_accounts.to_string()}
                    icon={icon_check_circle()}
                    trend={Trend::Up}
                    accent="border-l-green-500"
                />
            </div>
        </div>
    }
}
