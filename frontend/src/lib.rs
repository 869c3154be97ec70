use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use yew::prelude::*;

mod api;

use api::{GlooApi, StateView};
use dogtrails::{
    FormFields, ProviderItem, ProvidersDisplay, REGIONS, SearchController, TrailCard,
    TrailsDisplay,
};

type Controller =
    SearchController<GlooApi, StateView<TrailsDisplay>, StateView<ProvidersDisplay>>;

fn default_fields() -> FormFields {
    FormFields::new()
        .with("region", "")
        .with("effort", "steady")
        .with("length", "medium")
        .with("dog", "allowed_or_partial")
        .with("difficulty", "")
        .with("min_km", "")
        .with("max_km", "")
}

#[wasm_bindgen(start)]
pub fn start() {
    yew::Renderer::<App>::new().render();
}

#[function_component(App)]
fn app() -> Html {
    let fields = use_state(default_fields);
    let trails = use_state(TrailsDisplay::default);
    let providers = use_state(ProvidersDisplay::default);

    let controller = {
        let trails = trails.clone();
        let providers = providers.clone();
        use_memo((), move |_| {
            SearchController::new(GlooApi, StateView(trails), StateView(providers))
        })
    };

    {
        let controller = controller.clone();
        let fields = (*fields).clone();
        use_effect_with((), move |_| {
            run_search(controller, fields);
            || ()
        });
    }

    let on_submit = {
        let controller = controller.clone();
        let fields = fields.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            run_search(controller.clone(), (*fields).clone());
        })
    };

    let current = |name: &str| (*fields).get(name).unwrap_or_default().to_string();
    let region = current("region");
    let effort = current("effort");
    let length = current("length");
    let dog = current("dog");
    let difficulty = current("difficulty");

    html! {
        <div class="app">
            <header>
                <div>
                    <p class="eyebrow">{"dogtrails"}</p>
                    <h1>{"For you + dog"}</h1>
                </div>
            </header>
            <main>
                <section class="card form-card">
                    <form onsubmit={on_submit}>
                        <div class="grid">
                            <label>
                                {"Region"}
                                <select name="region" onchange={change_field(fields.clone(), "region")}>
                                    <option value="" selected={region.is_empty()}>{"Anywhere"}</option>
                                    { for REGIONS.iter().map(|entry| html! {
                                        <option value={entry.id} selected={region == entry.id}>{entry.label}</option>
                                    }) }
                                </select>
                            </label>
                            <label>
                                {"Effort"}
                                <select name="effort" onchange={change_field(fields.clone(), "effort")}>
                                    <option value="easy" selected={effort == "easy"}>{"Easy"}</option>
                                    <option value="steady" selected={effort == "steady"}>{"Steady"}</option>
                                    <option value="hard" selected={effort == "hard"}>{"Hard"}</option>
                                </select>
                            </label>
                            <label>
                                {"Length"}
                                <select name="length" onchange={change_field(fields.clone(), "length")}>
                                    <option value="short" selected={length == "short"}>{"Short (2-6 km)"}</option>
                                    <option value="medium" selected={length == "medium"}>{"Medium (6-12 km)"}</option>
                                    <option value="long" selected={length == "long"}>{"Long (12-24 km)"}</option>
                                </select>
                            </label>
                            <label>
                                {"Dog access"}
                                <select name="dog" onchange={change_field(fields.clone(), "dog")}>
                                    <option value="allowed_only" selected={dog == "allowed_only"}>{"Dogs allowed only"}</option>
                                    <option value="allowed_or_partial" selected={dog == "allowed_or_partial"}>{"Allowed or partial (with notes)"}</option>
                                    <option value="any" selected={dog == "any"}>{"Show all (include no-dog)"}</option>
                                </select>
                            </label>
                            <label>
                                {"Difficulty"}
                                <select name="difficulty" onchange={change_field(fields.clone(), "difficulty")}>
                                    <option value="" selected={difficulty.is_empty()}>{"Any"}</option>
                                    <option value="easy" selected={difficulty == "easy"}>{"Easy"}</option>
                                    <option value="moderate" selected={difficulty == "moderate"}>{"Moderate"}</option>
                                    <option value="hard" selected={difficulty == "hard"}>{"Hard"}</option>
                                </select>
                            </label>
                            <label>
                                {"Min km"}
                                <input type="number" name="min_km" min="0" step="1" value={current("min_km")} onchange={change_field(fields.clone(), "min_km")} />
                            </label>
                            <label>
                                {"Max km"}
                                <input type="number" name="max_km" min="0" step="1" value={current("max_km")} onchange={change_field(fields.clone(), "max_km")} />
                            </label>
                        </div>
                        <button type="submit">{"Find trails"}</button>
                    </form>
                </section>

                <section class="card results-card">
                    {render_results(&trails)}
                </section>

                <section class="card providers-card">
                    <h2>{"Data providers"}</h2>
                    {render_providers(&providers)}
                </section>
            </main>
        </div>
    }
}

fn run_search(controller: Rc<Controller>, fields: FormFields) {
    wasm_bindgen_futures::spawn_local(async move {
        controller.run(&fields).await;
    });
}

fn render_results(display: &TrailsDisplay) -> Html {
    match display {
        TrailsDisplay::Loading => html! { <div class="note">{"Loading trails…"}</div> },
        TrailsDisplay::Failed {
            message,
            count_label,
        } => html! {
            <>
                <p class="count">{count_label.clone()}</p>
                <div class="warning">{message.clone()}</div>
            </>
        },
        TrailsDisplay::Loaded(list) if list.cards.is_empty() => html! {
            <>
                <p class="count">{list.count_label.clone()}</p>
                <div class="warning">{"No trails matched your filters."}</div>
            </>
        },
        TrailsDisplay::Loaded(list) => html! {
            <>
                <p class="count">{list.count_label.clone()}</p>
                <div class="results">
                    { for list.cards.iter().map(render_card) }
                </div>
            </>
        },
    }
}

fn render_card(card: &TrailCard) -> Html {
    let warning = match &card.warning {
        Some(message) => html! { <div class="warning">{message.clone()}</div> },
        None => html! {},
    };
    html! {
        <article class="trail" key={card.key.clone()}>
            <h3>{card.name.clone()}</h3>
            <dl class="trail-detail">
                <dt>{"Distance"}</dt>
                <dd>{card.distance.clone()}</dd>
                <dt>{"Elevation"}</dt>
                <dd>{card.elevation.clone()}</dd>
                <dt>{"Difficulty"}</dt>
                <dd>{card.difficulty.clone()}</dd>
                <dt>{"Dogs"}</dt>
                <dd>{card.dog_policy.clone()}</dd>
                <dt>{"Surface"}</dt>
                <dd>{card.surface.clone()}</dd>
                <dt>{"Area"}</dt>
                <dd>{card.location.clone()}</dd>
                <dt>{"Source"}</dt>
                <dd>{card.provider.clone()}</dd>
            </dl>
            <a href={card.map_link.href.clone()} target={link_target(card.map_link.new_context)} rel="noreferrer">
                {card.map_link.label.clone()}
            </a>
            {warning}
        </article>
    }
}

fn render_providers(display: &ProvidersDisplay) -> Html {
    match display {
        ProvidersDisplay::Loading => html! { <div class="note">{"Loading providers…"}</div> },
        ProvidersDisplay::Failed { message } => html! { <div class="warning">{message.clone()}</div> },
        ProvidersDisplay::Loaded(items) => html! {
            <ul class="providers">
                { for items.iter().map(render_provider) }
            </ul>
        },
    }
}

fn render_provider(item: &ProviderItem) -> Html {
    html! {
        <li key={item.name.clone()}>
            <strong>{item.name.clone()}</strong>
            <span class="status">{item.status.clone()}</span>
            <p>{item.notes.clone()}</p>
            <a href={item.website.href.clone()} target={link_target(item.website.new_context)} rel="noreferrer">
                {item.website.label.clone()}
            </a>
        </li>
    }
}

fn link_target(new_context: bool) -> &'static str {
    if new_context { "_blank" } else { "_self" }
}

fn change_field(state: UseStateHandle<FormFields>, name: &'static str) -> Callback<Event> {
    Callback::from(move |event: Event| {
        let value = event
            .target()
            .and_then(|target| {
                if let Some(select) = target.dyn_ref::<web_sys::HtmlSelectElement>() {
                    Some(select.value())
                } else {
                    target
                        .dyn_ref::<web_sys::HtmlInputElement>()
                        .map(|input| input.value())
                }
            })
            .unwrap_or_default();
        let mut next = (*state).clone();
        next.set(name, value);
        state.set(next);
    })
}
