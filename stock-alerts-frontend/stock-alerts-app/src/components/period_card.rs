use leptos::prelude::*;

use crate::components::alert_card::StyledText;
use crate::view_model::PeriodGroupView;

#[component]
pub fn PeriodCard(group: PeriodGroupView) -> impl IntoView {
    let PeriodGroupView {
        symbol,
        quote_url,
        price,
        rows,
    } = group;
    view! {
        <a class="card" href=quote_url target="_blank" rel="noopener noreferrer">
            <h3>{symbol}" " <StyledText value=price /></h3>
            <ul>
                {rows
                    .into_iter()
                    .map(|row| {
                        view! {
                            <li>
                                {row.period}" Moving Average: " <StyledText value=row.average />
                                ", Difference: " <StyledText value=row.difference />
                                " (" <StyledText value=row.percentage /> ")"
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </a>
    }
}
