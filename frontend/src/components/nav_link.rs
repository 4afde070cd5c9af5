use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct NavLinkProps {
    pub label: AttrValue,
    pub href: AttrValue,
    #[prop_or_default]
    pub on_click: Option<Callback<MouseEvent>>,
    #[prop_or(classes!("nav-link"))]
    pub class: Classes,
}

#[function_component(NavLink)]
pub fn nav_link(props: &NavLinkProps) -> Html {
    // Fragment links scroll natively, so the default action is kept.
    let onclick = props.on_click.clone();

    html! {
        <a href={props.href.clone()} class={props.class.clone()} {onclick}>
            {props.label.clone()}
        </a>
    }
}
