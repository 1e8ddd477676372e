//! Template preview with sample values per marker

use contracts::domain::a002_template::aggregate::TemplateDto;
use contracts::shared::template_vars::{extract_markers, marker, missing_markers, substitute};
use leptos::prelude::*;
use std::collections::HashMap;

/// Non-blank sample values only; blank inputs count as missing
pub fn sample_values(inputs: &HashMap<String, String>) -> HashMap<String, String> {
    inputs
        .iter()
        .filter(|(_, v)| !v.trim().is_empty())
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect()
}

/// Wraps markers that stayed unresolved so they stand out in the preview
pub fn highlight_missing(rendered: &str, missing: &[String]) -> String {
    missing.iter().fold(rendered.to_string(), |acc, key| {
        let m = marker(key);
        acc.replace(&m, &format!("<mark class=\"marker--missing\">{}</mark>", m))
    })
}

#[component]
pub fn TemplatePreview(#[prop(into)] template: Signal<TemplateDto>) -> impl IntoView {
    let inputs = RwSignal::new(HashMap::<String, String>::new());

    let markers = Memo::new(move |_| {
        template.with(|t| {
            let mut keys = extract_markers(t.subject.as_deref().unwrap_or(""));
            for key in extract_markers(&t.content) {
                if !keys.contains(&key) {
                    keys.push(key);
                }
            }
            keys
        })
    });

    let rendered = Memo::new(move |_| {
        let values = inputs.with(sample_values);
        template.with(|t| {
            let subject = t.subject.clone().unwrap_or_default();
            let missing = missing_markers(&format!("{} {}", subject, t.content), &values);
            let subject = substitute(&subject, &values);
            let content = highlight_missing(&substitute(&t.content, &values), &missing);
            (subject, content, missing)
        })
    });

    view! {
        <div class="template-preview">
            <div class="template-preview__inputs">
                <For
                    each=move || markers.get()
                    key=|k| k.clone()
                    children=move |key| {
                        let key_input = key.clone();
                        let key_value = key.clone();
                        view! {
                            <div class="form-group form-group--inline">
                                <label>{marker(&key)}</label>
                                <input
                                    type="text"
                                    prop:value=move || inputs.with(|m| m.get(&key_value).cloned().unwrap_or_default())
                                    on:input=move |ev| {
                                        let value = event_target_value(&ev);
                                        inputs.update(|m| {
                                            m.insert(key_input.clone(), value);
                                        });
                                    }
                                />
                            </div>
                        }
                    }
                />
            </div>

            {move || {
                let missing = rendered.with(|r| r.2.clone());
                (!missing.is_empty()).then(|| view! {
                    <div class="warning-box">
                        <span class="warning-box__icon">"⚠"</span>
                        <span class="warning-box__text">
                            {format!("No value for: {}", missing.join(", "))}
                        </span>
                    </div>
                })
            }}

            <div class="template-preview__subject">{move || rendered.with(|r| r.0.clone())}</div>
            <div class="template-preview__body" inner_html=move || rendered.with(|r| r.1.clone())></div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_values_drop_blank() {
        let inputs = HashMap::from([
            ("name".to_string(), "Ann".to_string()),
            ("city".to_string(), "  ".to_string()),
        ]);
        let values = sample_values(&inputs);
        assert_eq!(values.len(), 1);
        assert_eq!(values["name"], "Ann");
    }

    #[test]
    fn test_highlight_missing() {
        let html = highlight_missing("Hi Ann from ^^city^^", &["city".to_string()]);
        assert_eq!(
            html,
            "Hi Ann from <mark class=\"marker--missing\">^^city^^</mark>"
        );
        assert_eq!(highlight_missing("plain", &[]), "plain");
    }
}
