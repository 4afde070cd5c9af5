use yew::prelude::*;

use crate::components::icon::IconView;
use crate::content::Icon;

#[derive(Properties, PartialEq)]
pub struct ProcessStepCardProps {
    pub number: u8,
    pub title: AttrValue,
    pub description: AttrValue,
    pub icon: Icon,
}

#[function_component(ProcessStepCard)]
pub fn process_step_card(props: &ProcessStepCardProps) -> Html {
    html! {
        <div class="process-step">
            <div class="step-badge-wrap">
                <div class="step-icon">
                    <IconView icon={props.icon} />
                </div>
                <div class="step-number">{props.number.to_string()}</div>
            </div>
            <h4>{props.title.clone()}</h4>
            <p>{props.description.clone()}</p>
        </div>
    }
}
