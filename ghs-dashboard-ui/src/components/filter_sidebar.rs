//! Sidebar with the row filters: country, disease, year range and gender.

use crate::state::AppState;
use dioxus::prelude::*;
use ghs_data::Gender;
use ghs_stats::filter::ALL_LABEL;
use ghs_stats::{FilterEvent, Selection, YearRange};

/// Row filters. Every change is dispatched to the session coordinator.
#[component]
pub fn FilterSidebar() -> Element {
    let mut state = use_context::<AppState>();
    let Some(dataset) = state.dataset() else {
        return rsx! {};
    };
    let Some(filter) = (state.filter)() else {
        return rsx! {};
    };

    let (first_year, last_year) = dataset.year_bounds();
    let countries: Vec<String> = dataset.countries().into_iter().map(String::from).collect();
    let diseases: Vec<String> = dataset.diseases().into_iter().map(String::from).collect();
    let selected_country = filter.country.to_string();
    let selected_disease = filter.disease.to_string();
    let years = filter.years;
    let gender = filter.gender.clone();

    let on_country = move |evt: Event<FormData>| {
        state.dispatch(FilterEvent::Country(Selection::from_label(&evt.value())));
    };
    let on_disease = move |evt: Event<FormData>| {
        state.dispatch(FilterEvent::Disease(Selection::from_label(&evt.value())));
    };
    let on_year_min = move |evt: Event<FormData>| {
        if let Ok(year) = evt.value().parse::<i32>() {
            let year = year.clamp(first_year, last_year);
            state.dispatch(FilterEvent::Years(YearRange::new(year, years.max())));
        }
    };
    let on_year_max = move |evt: Event<FormData>| {
        if let Ok(year) = evt.value().parse::<i32>() {
            let year = year.clamp(first_year, last_year);
            state.dispatch(FilterEvent::Years(YearRange::new(years.min(), year)));
        }
    };

    rsx! {
        aside {
            style: "width: 240px; padding: 12px; background: #FAFAFA; border-right: 1px solid #E0E0E0;",
            h3 { style: "margin-top: 0;", "Filters" }

            label {
                style: "display: block; font-weight: bold; margin-top: 8px;",
                "Country"
                select {
                    style: "display: block; width: 100%;",
                    onchange: on_country,
                    option { value: ALL_LABEL, selected: selected_country == ALL_LABEL, "{ALL_LABEL}" }
                    for country in countries {
                        option {
                            selected: country == selected_country,
                            value: "{country}",
                            "{country}"
                        }
                    }
                }
            }

            label {
                style: "display: block; font-weight: bold; margin-top: 8px;",
                "Disease"
                select {
                    style: "display: block; width: 100%;",
                    onchange: on_disease,
                    option { value: ALL_LABEL, selected: selected_disease == ALL_LABEL, "{ALL_LABEL}" }
                    for disease in diseases {
                        option {
                            selected: disease == selected_disease,
                            value: "{disease}",
                            "{disease}"
                        }
                    }
                }
            }

            div {
                style: "margin-top: 8px;",
                div { style: "font-weight: bold;", "Year Range" }
                input {
                    r#type: "number",
                    min: "{first_year}",
                    max: "{last_year}",
                    value: "{years.min()}",
                    style: "width: 80px;",
                    onchange: on_year_min,
                }
                " to "
                input {
                    r#type: "number",
                    min: "{first_year}",
                    max: "{last_year}",
                    value: "{years.max()}",
                    style: "width: 80px;",
                    onchange: on_year_max,
                }
            }

            fieldset {
                style: "margin-top: 8px; border: none; padding: 0;",
                legend { style: "font-weight: bold;", "Gender" }
                for choice in Selection::<Gender>::choices() {
                    label {
                        key: "{choice}",
                        style: "display: block;",
                        input {
                            r#type: "radio",
                            name: "gender",
                            value: "{choice}",
                            checked: choice == gender,
                            onchange: {
                                let choice = choice.clone();
                                move |_: Event<FormData>| {
                                    state.dispatch(FilterEvent::Gender(choice.clone()))
                                }
                            },
                        }
                        " {choice}"
                    }
                }
            }
        }
    }
}
