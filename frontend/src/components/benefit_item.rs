use yew::prelude::*;

use crate::components::icon::IconView;
use crate::content::Icon;

#[derive(Properties, PartialEq)]
pub struct BenefitItemProps {
    pub title: AttrValue,
    pub text: AttrValue,
}

#[function_component(BenefitItem)]
pub fn benefit_item(props: &BenefitItemProps) -> Html {
    html! {
        <div class="benefit-item">
            <div class="benefit-check">
                <IconView icon={Icon::CheckCircle} />
            </div>
            <div>
                <h4>{props.title.clone()}</h4>
                <p>{props.text.clone()}</p>
            </div>
        </div>
    }
}
