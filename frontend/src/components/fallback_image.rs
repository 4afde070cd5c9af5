use log::warn;
use web_sys::Event;
use yew::prelude::*;

use crate::config;
use crate::content::ImageAsset;

#[derive(Properties, PartialEq)]
pub struct FallbackImageProps {
    pub image: ImageAsset,
    #[prop_or_default]
    pub class: Classes,
}

/// Shows the local asset and swaps to the remote fallback on the first load
/// error. A second failure is left alone so the browser can't loop.
#[function_component(FallbackImage)]
pub fn fallback_image(props: &FallbackImageProps) -> Html {
    let use_fallback = use_state(|| false);

    let onerror = {
        let use_fallback = use_fallback.clone();
        let image = props.image;
        Callback::from(move |_: Event| {
            if !*use_fallback {
                warn!("Image {} failed to load, using {}", image.file, image.fallback);
                use_fallback.set(true);
            }
        })
    };

    let src = if *use_fallback {
        props.image.fallback.to_string()
    } else {
        config::asset_path(props.image.file)
    };

    html! {
        <img
            src={src}
            alt={props.image.alt}
            class={props.class.clone()}
            loading="lazy"
            {onerror}
        />
    }
}
