use yew::prelude::*;

use crate::components::icon::IconView;
use crate::content::Icon;

#[derive(Properties, PartialEq)]
pub struct ServiceCardProps {
    pub title: AttrValue,
    pub description: AttrValue,
    pub icon: Icon,
    #[prop_or_default]
    pub tag: Option<AttrValue>,
}

#[function_component(ServiceCard)]
pub fn service_card(props: &ServiceCardProps) -> Html {
    html! {
        <div class="service-card">
            {
                if let Some(tag) = &props.tag {
                    html! { <span class="service-tag">{tag.clone()}</span> }
                } else {
                    html! {}
                }
            }
            <div class="service-icon">
                <IconView icon={props.icon} />
            </div>
            <h3>{props.title.clone()}</h3>
            <p>{props.description.clone()}</p>
        </div>
    }
}
