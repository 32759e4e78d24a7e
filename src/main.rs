//! Main module for the tip rounder application using Yew.
//! Wires UI components, state hooks, and side-effect logic.

use tip_rounder::{
    defaults::{BILL_INCREMENT, PREFERRED_TIP_RATE},
    generate_bill_increments, parse_bill_total, preferred_selection, standard_bill, to_cents,
    BILL_INPUT_PATTERN,
};
use web_sys::HtmlInputElement;
use yew::prelude::*;

mod components;
mod config;

use components::{render_bill_summary, BillSelect, PersonCountSelect};
use config::{DEFAULT_PERSON_COUNT, MAX_PERSON_COUNT};

/// Primary application component wiring state, effects, and UI elements.
#[function_component(Main)]
fn main_component() -> Html {
    let bill_text = use_state(String::new);
    let person_count = use_state(|| DEFAULT_PERSON_COUNT);
    let selected_idx = use_state(|| None::<usize>);

    // Recomputed synchronously on every render; invalid input becomes NaN and
    // flows through the generator as an empty candidate list.
    let bill_total = parse_bill_total(&bill_text).unwrap_or(f64::NAN);
    let standard = standard_bill(bill_total, PREFERRED_TIP_RATE);
    let increments = generate_bill_increments(bill_total, PREFERRED_TIP_RATE, BILL_INCREMENT);

    // Reapply the preferred-selection policy whenever the parsed bill (and
    // with it the candidate list) changes. Keyed on cents so NaN maps to a
    // stable None instead of a never-equal float.
    {
        let selected_idx = selected_idx.clone();
        let standard_total = standard.bill_total_with_tip;
        let increments = increments.clone();
        let bill_key = bill_total.is_finite().then(|| to_cents(bill_total));
        use_effect_with(bill_key, move |_| {
            selected_idx.set(preferred_selection(&increments, standard_total));
        });
    }

    let on_bill_input = {
        let bill_text = bill_text.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            bill_text.set(input.value());
        })
    };

    let on_bill_choice = {
        let selected_idx = selected_idx.clone();
        Callback::from(move |idx: usize| selected_idx.set(Some(idx)))
    };

    let on_person_choice = {
        let person_count = person_count.clone();
        Callback::from(move |count: usize| person_count.set(count))
    };

    let selected_bill = (*selected_idx).and_then(|idx| increments.get(idx).copied());

    html! {
        <main class="container">
            <div class="tip-widget">
                <form class="bill-form">
                    <input
                        type="text"
                        class="bill-input"
                        placeholder="Bill Total:"
                        inputmode="decimal"
                        pattern={BILL_INPUT_PATTERN}
                        value={(*bill_text).clone()}
                        oninput={on_bill_input}
                    />

                    if !increments.is_empty() {
                        <BillSelect
                            increments={increments.clone()}
                            selected={*selected_idx}
                            onchoice={on_bill_choice}
                        />
                    }

                    <PersonCountSelect
                        value={*person_count}
                        max={MAX_PERSON_COUNT}
                        onchoice={on_person_choice}
                    />
                </form>

                { render_bill_summary(selected_bill.as_ref(), *person_count) }
            </div>
        </main>
    }
}

/// App root wrapping the tip widget.
#[function_component]
pub fn App() -> Html {
    html! {
        <Main />
    }
}

/// Entry point: initializes Yew renderer for the App component.
fn main() {
    // Set the panic hook to log detailed errors to the console
    console_error_panic_hook::set_once();
    yew::Renderer::<App>::new().render();
}
