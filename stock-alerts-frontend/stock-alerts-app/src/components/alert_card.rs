use leptos::either::Either;
use leptos::prelude::*;

use crate::view_model::{AlertCardView, StyledValue};

/// A value wrapped in a styled span, or bare text when it carries no style.
#[component]
pub fn StyledText(value: StyledValue) -> impl IntoView {
    let StyledValue { text, style } = value;
    if style.is_plain() {
        Either::Left(text)
    } else {
        Either::Right(view! { <span style=style.css()>{text}</span> })
    }
}

/// One alert. The whole card links to the quote page in a new tab.
#[component]
pub fn AlertCard(card: AlertCardView) -> impl IntoView {
    let AlertCardView {
        title,
        quote_url,
        price,
        moving_averages,
        macd,
        signal,
        adx,
        plus_di,
        minus_di,
        rsi,
        ..
    } = card;
    view! {
        <a class="card" href=quote_url target="_blank" rel="noopener noreferrer">
            <h3>{title}</h3>
            <p>"Current Price: " <StyledText value=price /></p>
            {moving_averages
                .into_iter()
                .map(|line| view! { <p>{line.period}"-Day Moving Average: "{line.value}</p> })
                .collect_view()}
            <p>"MACD: " <StyledText value=macd /> " (Signal: " {signal} ")"</p>
            <p>
                "ADX: " <StyledText value=adx />
                ", +DI: " <StyledText value=plus_di />
                ", -DI: " <StyledText value=minus_di />
            </p>
            <p>"RSI: " <StyledText value=rsi /></p>
        </a>
    }
}
