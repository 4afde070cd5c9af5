use yew::prelude::*;

use crate::content::Icon;

impl Icon {
    /// Stroke paths on a 24x24 grid.
    fn paths(self) -> &'static [&'static str] {
        match self {
            Icon::Leaf => &[
                "M11 20A7 7 0 0 1 9.8 6.1C15.5 5 17 4.48 19 2c1 2 2 4.18 2 8 0 5.5-4.78 10-10 10Z",
                "M2 21c0-3 1.85-5.36 5.08-6C9.5 14.52 12 13 13 12",
            ],
            Icon::Droplets => &[
                "M7 16.3c2.2 0 4-1.83 4-4.05 0-1.16-.57-2.26-1.71-3.19S7.29 6.75 7 5.3c-.29 1.45-1.14 2.84-2.29 3.76S3 11.1 3 12.25c0 2.22 1.8 4.05 4 4.05z",
                "M12.56 6.6A10.97 10.97 0 0 0 14 3.02c.5 2.5 2 4.9 4 6.5s3 3.5 3 5.5a6.98 6.98 0 0 1-11.91 4.97",
            ],
            Icon::Wind => &[
                "M17.7 7.7a2.5 2.5 0 1 1 1.8 4.3H2",
                "M9.6 4.6A2 2 0 1 1 11 8H2",
                "M12.6 19.4A2 2 0 1 0 14 16H2",
            ],
            Icon::BarChart => &["M3 3v18h18", "M18 17V9", "M13 17V5", "M8 17v-3"],
            Icon::Calendar => &[
                "M5 4h14a2 2 0 0 1 2 2v14a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2z",
                "M16 2v4",
                "M8 2v4",
                "M3 10h18",
            ],
            Icon::MapPin => &[
                "M20 10c0 6-8 12-8 12s-8-6-8-12a8 8 0 0 1 16 0Z",
                "M12 7a3 3 0 1 0 0 6a3 3 0 1 0 0-6z",
            ],
            Icon::CheckCircle => &["M12 2a10 10 0 1 0 0 20a10 10 0 1 0 0-20z", "m9 12 2 2 4-4"],
            Icon::ArrowRight => &["M5 12h14", "m12 5 7 7-7 7"],
            Icon::ShieldCheck => &["M12 22s8-4 8-10V5l-8-3-8 3v7c0 6 8 10 8 10", "m9 12 2 2 4-4"],
            Icon::Zap => &["M13 2 3 14h9l-1 8 10-12h-9l1-8z"],
            Icon::Phone => &[
                "M22 16.92v3a2 2 0 0 1-2.18 2 19.79 19.79 0 0 1-8.63-3.07 19.5 19.5 0 0 1-6-6 19.79 19.79 0 0 1-3.07-8.67A2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72 12.84 12.84 0 0 0 .7 2.81 2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.27-1.27a2 2 0 0 1 2.11-.45 12.84 12.84 0 0 0 2.81.7A2 2 0 0 1 22 16.92z",
            ],
            Icon::Mail => &[
                "M4 4h16a2 2 0 0 1 2 2v12a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2z",
                "m22 6-10 7L2 6",
            ],
            Icon::Menu => &["M4 12h16", "M4 6h16", "M4 18h16"],
            Icon::Close => &["M18 6 6 18", "m6 6 12 12"],
            Icon::Plus => &["M5 12h14", "M12 5v14"],
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct IconViewProps {
    pub icon: Icon,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(IconView)]
pub fn icon_view(props: &IconViewProps) -> Html {
    html! {
        <svg
            class={classes!("icon", props.class.clone())}
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            { for props.icon.paths().iter().map(|d| html! { <path d={*d} /> }) }
        </svg>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_icon_has_paths() {
        let all = [
            Icon::Leaf, Icon::Droplets, Icon::Wind, Icon::BarChart, Icon::Calendar,
            Icon::MapPin, Icon::CheckCircle, Icon::ArrowRight, Icon::ShieldCheck, Icon::Zap,
            Icon::Phone, Icon::Mail, Icon::Menu, Icon::Close, Icon::Plus,
        ];
        for icon in all {
            assert!(!icon.paths().is_empty(), "{:?}", icon);
        }
    }
}
