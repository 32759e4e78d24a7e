//! Pure Yew view components for the tip rounder UI.
//!
//! This module contains stateless components that render based on props,
//! making them easy to test and reuse.

use tip_rounder::{format_percent, format_usd, per_person_share, RoundedBill};
use web_sys::HtmlSelectElement;
use yew::prelude::*;

/// Label for one candidate: tip percentage and tip amount, e.g.
/// `18.0% Tip — $9.00`. NaN derivations fall back to their zero defaults.
pub fn bill_option_label(bill: &RoundedBill) -> String {
    format!(
        "{} Tip — {}",
        format_percent(bill.tip_percentage()),
        format_usd(bill.tip_amount())
    )
}

/// Selector over the generated rounded-bill candidates.
#[derive(Properties, PartialEq)]
pub struct BillSelectProps {
    pub increments: Vec<RoundedBill>,
    pub selected: Option<usize>,
    pub onchoice: Callback<usize>,
}

#[function_component(BillSelect)]
pub fn bill_select(props: &BillSelectProps) -> Html {
    let onchange = {
        let onchoice = props.onchoice.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            if let Ok(idx) = select.value().parse::<usize>() {
                onchoice.emit(idx);
            }
        })
    };

    html! {
        <select class="bill-select" onchange={onchange}>
            { props.increments.iter().enumerate().map(|(idx, bill)| {
                html! {
                    <option value={idx.to_string()} selected={props.selected == Some(idx)}>
                        { bill_option_label(bill) }
                    </option>
                }
            }).collect::<Html>() }
        </select>
    }
}

/// Selector for how many people split the bill.
#[derive(Properties, PartialEq)]
pub struct PersonCountSelectProps {
    pub value: usize,
    pub max: usize,
    pub onchoice: Callback<usize>,
}

#[function_component(PersonCountSelect)]
pub fn person_count_select(props: &PersonCountSelectProps) -> Html {
    let onchange = {
        let onchoice = props.onchoice.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            if let Ok(count) = select.value().parse::<usize>() {
                onchoice.emit(count);
            }
        })
    };

    html! {
        <label class="person-select-label">
            <span>{ "People" }</span>
            <select class="person-select" onchange={onchange}>
                { (1..=props.max).map(|count| {
                    html! {
                        <option value={count.to_string()} selected={props.value == count}>
                            { count }
                        </option>
                    }
                }).collect::<Html>() }
            </select>
        </label>
    }
}

/// Formatted amounts for the summary: the selected total (no selection
/// falls back to `$0.00`) and the per-person share, present only when more
/// than one person splits the bill. A single person gets no share and sees
/// the plain "Total" label instead.
pub fn summary_amounts(
    selected: Option<&RoundedBill>,
    person_count: usize,
) -> (String, Option<String>) {
    let total = selected.map(|bill| bill.bill_total_with_tip).unwrap_or(0.0);
    let share = (person_count > 1).then(|| format_usd(per_person_share(total, person_count)));
    (format_usd(total), share)
}

/// Renders the selected total and the per-person breakdown.
pub fn render_bill_summary(selected: Option<&RoundedBill>, person_count: usize) -> Html {
    let (total, share) = summary_amounts(selected, person_count);

    html! {
        <div class="bill-summary">
            <div class="bill-summary-total">{ total }</div>
            <div class="bill-summary-share">
                if let Some(share) = share {
                    <span>
                        <span class="share-amount">{ share }</span>
                        { " each" }
                    </span>
                } else {
                    <span class="share-label">{ "Total" }</span>
                }
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::{bill_option_label, summary_amounts};
    use tip_rounder::RoundedBill;

    #[test]
    fn option_label_shows_percentage_and_amount() {
        let bill = RoundedBill::new(50.0, 59.0);
        assert_eq!(bill_option_label(&bill), "18.0% Tip — $9.00");
    }

    #[test]
    fn option_label_defaults_to_zero_for_a_zero_bill() {
        let bill = RoundedBill::new(0.0, 0.0);
        assert_eq!(bill_option_label(&bill), "0.0% Tip — $0.00");
    }

    #[test]
    fn one_person_sees_the_total_label() {
        let bill = RoundedBill::new(50.0, 59.0);
        assert_eq!(summary_amounts(Some(&bill), 1), ("$59.00".to_string(), None));
    }

    #[test]
    fn several_people_see_an_even_share() {
        let bill = RoundedBill::new(50.0, 59.0);
        assert_eq!(
            summary_amounts(Some(&bill), 4),
            ("$59.00".to_string(), Some("$14.75".to_string()))
        );
    }

    #[test]
    fn missing_selection_falls_back_to_zero() {
        assert_eq!(summary_amounts(None, 1), ("$0.00".to_string(), None));
        assert_eq!(
            summary_amounts(None, 3),
            ("$0.00".to_string(), Some("$0.00".to_string()))
        );
    }
}
