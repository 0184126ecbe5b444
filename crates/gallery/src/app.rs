use leptos::*;
use ui_components::prelude::*;
use ui_components::{button_props_from_bag, use_controllable};
use ui_contract::{FilePolicy, NavMenuGroup, NavMenuItem, PropBag, PropValue};

#[component]
fn Section(title: &'static str, children: Children) -> impl IntoView {
    view! {
        <section class="mb-10">
            <h2 class="mb-4 text-xl font-semibold text-gray-900">{title}</h2>
            <div class="flex flex-col gap-4">{children()}</div>
        </section>
    }
}

#[component]
fn ButtonPlayground() -> impl IntoView {
    let style_token = create_rw_signal("primary".to_string());
    let variant_token = create_rw_signal("solid".to_string());
    let size_token = create_rw_signal("base".to_string());
    let block = create_rw_signal(false);

    let token_options = |tokens: &[&str]| {
        tokens
            .iter()
            .map(|token| SelectOption::new(*token, *token))
            .collect::<Vec<_>>()
    };

    // "ghost" is deliberately outside the schema so the rejection path
    // stays visible in the gallery.
    let variant_options = token_options(&["solid", "soft", "link", "outline", "ghost"]);
    let style_options = token_options(&["primary", "secondary"]);
    let size_options = token_options(&["xs", "sm", "base", "lg"]);

    let decoded = create_memo(move |_| {
        let mut bag = PropBag::new();
        bag.insert("style".to_string(), PropValue::Text(style_token.get()));
        bag.insert("variant".to_string(), PropValue::Text(variant_token.get()));
        bag.insert("size".to_string(), PropValue::Text(size_token.get()));
        bag.insert("block".to_string(), PropValue::Bool(block.get()));
        button_props_from_bag(&bag)
    });

    view! {
        <Card title="Playground">
            <div class="grid grid-cols-1 gap-4 sm:grid-cols-3">
                <SelectField
                    label="Style"
                    options=style_options
                    value=Signal::derive(move || style_token.get()).into()
                    on_change=Callback::new(move |next| style_token.set(next))
                />
                <SelectField
                    label="Variant"
                    options=variant_options
                    value=Signal::derive(move || variant_token.get()).into()
                    on_change=Callback::new(move |next| variant_token.set(next))
                />
                <SelectField
                    label="Size"
                    options=size_options
                    value=Signal::derive(move || size_token.get()).into()
                    on_change=Callback::new(move |next| size_token.set(next))
                />
            </div>
            <CheckboxField
                label="Block width"
                checked=Signal::derive(move || block.get()).into()
                on_change=Callback::new(move |next| block.set(next))
            />
            <div class="mt-4">
                {move || match decoded.get() {
                    Ok(props) => view! {
                        <Button
                            style=props.style
                            variant=props.variant
                            size=props.size
                            block=props.block
                            icon_only=props.icon_only
                            disabled=props.disabled
                        >
                            "Configured button"
                        </Button>
                    }
                    .into_view(),
                    Err(err) => view! {
                        <Alert tone=AlertTone::Danger title="Invalid configuration">
                            {err.to_string()}
                        </Alert>
                    }
                    .into_view(),
                }}
            </div>
        </Card>
    }
}

fn nav_entries() -> Vec<NavEntry> {
    vec![
        NavEntry::Link {
            label: "Home".to_string(),
            href: "/".to_string(),
            active: true,
        },
        NavEntry::Dropdown {
            label: "Resources".to_string(),
            groups: vec![NavMenuGroup {
                title: "Learn".to_string(),
                items: vec![
                    NavMenuItem {
                        label: "Documentation".to_string(),
                        href: "/docs".to_string(),
                    },
                    NavMenuItem {
                        label: "Changelog".to_string(),
                        href: "/changelog".to_string(),
                    },
                ],
            }],
            active: false,
        },
        NavEntry::Link {
            label: "Pricing".to_string(),
            href: "/pricing".to_string(),
            active: false,
        },
    ]
}

#[component]
/// Gallery window rendering every component family.
pub fn GalleryApp() -> impl IntoView {
    let page = create_rw_signal(50u32);
    let modal_open = create_rw_signal(false);
    let toast_requested = create_rw_signal(false);
    let notifications = create_rw_signal(true);
    let languages = create_rw_signal(vec!["rust".to_string()]);
    let (accordion_open, set_accordion_open) =
        use_controllable::<Vec<String>>(None, None, vec!["first".to_string()]);
    let drag_policy = FilePolicy {
        max_files: 2,
        ..FilePolicy::default()
    };

    view! {
        <main class="mx-auto max-w-4xl px-4 py-8">
            <h1 class="mb-8 text-2xl font-bold text-gray-900">"Component gallery"</h1>

            <Section title="Navigation bar">
                <NavigationBar
                    entries=nav_entries()
                    logo=ViewFn::from(|| view! {
                        <span class="font-bold text-primary-600">"meridian"</span>
                    }.into_view())
                />
            </Section>

            <Section title="Buttons">
                <div class="flex flex-wrap items-center gap-3">
                    <Button>"Primary solid"</Button>
                    <Button variant=ButtonVariant::Soft>"Soft"</Button>
                    <Button variant=ButtonVariant::Outline>"Outline"</Button>
                    <Button style=ButtonStyle::Secondary>"Secondary"</Button>
                    <Button size=ButtonSize::Xs>"Tiny"</Button>
                    <Button size=ButtonSize::Lg variant=ButtonVariant::Link>"Large link"</Button>
                    <Button icon_only=true aria_label="Close">
                        <Icon icon=IconName::Close />
                    </Button>
                    <Button
                        as_child=ChildRoot::new(RootTag::Anchor).attr("href", "/docs")
                        variant=ButtonVariant::Outline
                    >
                        "Docs link"
                    </Button>
                </div>
                <ButtonPlayground />
            </Section>

            <Section title="Fields">
                <TextField label="Project name" placeholder="acme-ui" helper_text="Lowercase letters and dashes." />
                <TextField label="Owner" error="Owner is required." required=true />
                <TextArea label="Description" placeholder="What does this project do?" />
                <CheckboxField
                    label="Email notifications"
                    description="A summary every Friday."
                    checked=Signal::derive(move || notifications.get()).into()
                    on_change=Callback::new(move |next| notifications.set(next))
                />
                <Switch label="Dark mode" variant=ToggleVariant::Mode />
                <RadioGroup
                    name="plan"
                    options=vec![
                        SelectOption::new("starter", "Starter"),
                        SelectOption::new("team", "Team"),
                        SelectOption::new("enterprise", "Enterprise").disabled(),
                    ]
                    default_value="starter".to_string()
                />
            </Section>

            <Section title="Selection">
                <SelectField
                    label="Region"
                    options=vec![
                        SelectOption::new("eu", "Europe"),
                        SelectOption::new("us", "United States"),
                        SelectOption::new("ap", "Asia Pacific"),
                    ]
                    default_value="eu".to_string()
                />
                <MultiSelect
                    label="Languages"
                    options=vec![
                        SelectOption::new("rust", "Rust"),
                        SelectOption::new("ts", "TypeScript"),
                        SelectOption::new("go", "Go"),
                    ]
                    value=Signal::derive(move || languages.get()).into()
                    on_change=Callback::new(move |next| languages.set(next))
                />
            </Section>

            <Section title="Tabs and breadcrumbs">
                <Tabs
                    items=vec![
                        TabItem::new("overview", "Overview", || view! {
                            <p>"High-level project summary."</p>
                        }.into_view()),
                        TabItem::new("activity", "Activity", || view! {
                            <p>"Recent changes and deploys."</p>
                        }.into_view()),
                        TabItem::new("settings", "Settings", || view! {
                            <p>"Danger zone lives here."</p>
                        }.into_view()),
                    ]
                />
                <Breadcrumbs
                    show_home_icon=true
                    separator=BreadcrumbSeparator::Caret
                    items=vec![
                        BreadcrumbEntry::link("Home", "/"),
                        BreadcrumbEntry::link("Projects", "/projects"),
                        BreadcrumbEntry::text("meridian"),
                    ]
                />
            </Section>

            <Section title="Pagination">
                <Pagination
                    current_page=Signal::derive(move || page.get())
                    total_pages=100u32
                    show_first_last=true
                    on_page_change=Callback::new(move |next| page.set(next))
                />
            </Section>

            <Section title="Overlays">
                <div class="flex flex-wrap items-center gap-3">
                    <Button on_click=Callback::new(move |_| modal_open.set(true))>
                        "Open modal"
                    </Button>
                    <Popover trigger=ViewFn::from(|| view! {
                        <Button variant=ButtonVariant::Soft>"Hover me"</Button>
                    }.into_view())>
                        <p class="text-sm text-gray-700">
                            "Stays open while the pointer travels here."
                        </p>
                    </Popover>
                    <Tooltip text="Copied to clipboard">
                        <Button variant=ButtonVariant::Outline>"With tooltip"</Button>
                    </Tooltip>
                    <Button
                        variant=ButtonVariant::Soft
                        on_click=Callback::new(move |_| {
                            toast_requested.set(false);
                            toast_requested.set(true);
                        })
                    >
                        "Show toast"
                    </Button>
                </div>
                <Modal
                    open=Signal::derive(move || modal_open.get())
                    title="Confirm deletion"
                    on_close=Callback::new(move |_| modal_open.set(false))
                >
                    <p class="text-sm text-gray-700">"This cannot be undone."</p>
                </Modal>
                <Toast show=Signal::derive(move || toast_requested.get()) duration_ms=4000>
                    <p class="text-sm font-medium text-gray-900">"Saved."</p>
                </Toast>
            </Section>

            <Section title="Display">
                <div class="flex flex-wrap items-center gap-3">
                    <Badge>"draft"</Badge>
                    <Badge tone=BadgeTone::Primary>"beta"</Badge>
                    <Badge tone=BadgeTone::Success>"stable"</Badge>
                    <Badge tone=BadgeTone::Danger>"deprecated"</Badge>
                    <Avatar name="Ada Lovelace" />
                    <Avatar name="Grace Hopper" size=AvatarSize::Lg />
                </div>
                <Alert tone=AlertTone::Warning title="Heads up">
                    "Quota resets at midnight UTC."
                </Alert>
                <Accordion
                    value=Signal::derive(move || accordion_open.get()).into()
                    on_change=set_accordion_open
                    items=vec![
                        AccordionItem::new("first", "What is this?", || view! {
                            <p>"A design-system component library."</p>
                        }.into_view()),
                        AccordionItem::new("second", "Is it accessible?", || view! {
                            <p>"Controls carry their ARIA state attributes."</p>
                        }.into_view()),
                    ]
                />
            </Section>

            <Section title="File upload">
                <FileUpload />
                <FileUpload variant=FileUploadVariant::DragDrop policy=drag_policy />
                <FileUpload variant=FileUploadVariant::WithPreview />
            </Section>
        </main>
    }
}
