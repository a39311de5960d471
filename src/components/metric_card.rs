use yew::prelude::*;
use crate::models::VaultMetric;

#[derive(Properties, PartialEq)]
pub struct MetricCardProps {
    pub metric: VaultMetric,
}

#[function_component(MetricCard)]
pub fn metric_card(props: &MetricCardProps) -> Html {
    let metric = &props.metric;
    html! {
        <div class="metric-card">
            <span class="metric-label">{metric.label.clone()}</span>
            <span class="metric-value">{metric.formatted_value()}</span>
            <span class={metric.trend_class()}>{metric.formatted_change()}</span>
        </div>
    }
}
