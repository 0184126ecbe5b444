//! File selection with count, size, and type enforcement.

use leptos::*;
use ui_contract::{FileMeta, FilePolicy, FileRejection};
use ui_core::{merge_class_lists, PreviewSlot};
use web_sys::HtmlInputElement;

use super::{bool_token, Button, ButtonStyle, ButtonVariant, ChildRoot, RootTag};
use crate::icon::{Icon, IconName, IconSize};
use crate::state::BrowserUrlFactory;

/// Visual arrangements of the upload surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileUploadVariant {
    /// Upload button with a file list below.
    Default,
    /// Choose-file button beside the current file name.
    Simple,
    /// Upload button beside a thumbnail of the selected image.
    WithPreview,
    /// Drop zone accepting dragged files.
    DragDrop,
}

impl Default for FileUploadVariant {
    fn default() -> Self {
        Self::Default
    }
}

impl FileUploadVariant {
    /// Stable token for `data-ui-*` attributes.
    pub fn token(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Simple => "simple",
            Self::WithPreview => "with-preview",
            Self::DragDrop => "drag-drop",
        }
    }
}

fn file_meta(file: &web_sys::File) -> FileMeta {
    FileMeta {
        name: file.name(),
        mime: file.type_(),
        bytes: file.size() as u64,
    }
}

fn files_from_list(list: Option<web_sys::FileList>) -> Vec<web_sys::File> {
    let Some(list) = list else {
        return Vec::new();
    };
    (0..list.length()).filter_map(|index| list.get(index)).collect()
}

#[component]
fn HiddenFileInput(
    accept: String,
    multiple: bool,
    disabled: MaybeSignal<bool>,
    on_files: Callback<Vec<web_sys::File>>,
) -> impl IntoView {
    view! {
        <input
            class="hidden"
            type="file"
            accept=accept
            multiple=multiple
            disabled=move || disabled.get()
            on:change=move |event| {
                let input = event_target::<HtmlInputElement>(&event);
                on_files.call(files_from_list(input.files()));
                input.set_value("");
            }
        />
    }
}

#[component]
/// File selection surface enforcing a maximum file count, a per-file
/// size ceiling, and a MIME allow-list. A batch violating the policy is
/// rejected whole with a structured reason; files accepted earlier stay
/// selected.
pub fn FileUpload(
    /// Surface arrangement.
    #[prop(default = FileUploadVariant::Default)]
    variant: FileUploadVariant,
    /// Acceptance policy for incoming batches.
    #[prop(default = FilePolicy::default())]
    policy: FilePolicy,
    /// Disabled state.
    #[prop(optional, into)]
    disabled: MaybeSignal<bool>,
    /// Invoked with each accepted batch.
    #[prop(optional)]
    on_files_selected: Option<Callback<Vec<FileMeta>>>,
    /// Extra utility classes merged onto the outer container.
    #[prop(optional, into)]
    class: Option<String>,
) -> impl IntoView {
    let selected = create_rw_signal(Vec::<FileMeta>::new());
    let rejection = create_rw_signal(None::<FileRejection>);
    let preview_url = create_rw_signal(None::<String>);
    let drag_active = create_rw_signal(false);

    let preview = store_value(PreviewSlot::new(BrowserUrlFactory));
    on_cleanup(move || {
        preview.update_value(|slot| slot.clear());
    });

    let policy_for_batches = policy.clone();
    let handle_files = Callback::new(move |files: Vec<web_sys::File>| {
        if files.is_empty() {
            return;
        }
        let batch: Vec<FileMeta> = files.iter().map(file_meta).collect();
        match policy_for_batches.accept_batch(selected.get_untracked().len(), &batch) {
            Ok(()) => {
                selected.update(|current| current.extend(batch.iter().cloned()));
                rejection.set(None);
                if variant == FileUploadVariant::WithPreview {
                    if let Some(first) = files.first() {
                        let url = preview
                            .try_update_value(|slot| {
                                slot.show(first).map(str::to_string)
                            })
                            .flatten();
                        preview_url.set(url);
                    }
                }
                if let Some(on_files_selected) = on_files_selected {
                    on_files_selected.call(batch);
                }
            }
            Err(reason) => rejection.set(Some(reason)),
        }
    });

    let remove_file = move |index: usize| {
        selected.update(|current| {
            if index < current.len() {
                current.remove(index);
            }
        });
        if variant == FileUploadVariant::WithPreview {
            preview.update_value(|slot| slot.clear());
            preview_url.set(None);
        }
    };

    let accept = policy.accept_attribute();
    let multiple = policy.max_files > 1;
    let accepted_summary = policy.accepted_summary();
    let max_files = policy.max_files;

    let surface = match variant {
        FileUploadVariant::Simple => view! {
            <div class="flex border rounded-lg overflow-hidden">
                <label>
                    <Button
                        style=ButtonStyle::Primary
                        variant=ButtonVariant::Link
                        disabled=disabled
                        class="h-full px-4 py-2 rounded-none"
                        as_child=ChildRoot::new(RootTag::Span).attr("class", "cursor-pointer")
                    >
                        "Choose File"
                        <HiddenFileInput
                            accept=accept.clone()
                            multiple=multiple
                            disabled=disabled
                            on_files=handle_files
                        />
                    </Button>
                </label>
                <div class="flex-1 px-4 py-2 text-gray-500">
                    {move || {
                        selected
                            .get()
                            .first()
                            .map(|file| file.name.clone())
                            .unwrap_or_else(|| "No file chosen".to_string())
                    }}
                </div>
            </div>
        }
        .into_view(),
        FileUploadVariant::WithPreview => view! {
            <div class="flex items-center gap-3">
                <div class="h-12 w-12 flex items-center justify-center bg-gray-100 rounded-full overflow-hidden">
                    {move || match preview_url.get() {
                        Some(url) => view! {
                            <img src=url alt="Preview" class="h-full w-full object-cover" />
                        }
                        .into_view(),
                        None => view! {
                            <Icon icon=IconName::Image size=IconSize::Lg class="text-gray-400" />
                        }
                        .into_view(),
                    }}
                </div>
                <label>
                    <Button
                        style=ButtonStyle::Primary
                        variant=ButtonVariant::Solid
                        disabled=disabled
                        as_child=ChildRoot::new(RootTag::Span)
                            .attr("class", "flex items-center gap-2 cursor-pointer")
                    >
                        <Icon icon=IconName::Upload size=IconSize::Sm />
                        "Upload an image"
                        <HiddenFileInput
                            accept=accept.clone()
                            multiple=false
                            disabled=disabled
                            on_files=handle_files
                        />
                    </Button>
                </label>
            </div>
        }
        .into_view(),
        FileUploadVariant::DragDrop => view! {
            <div
                class=move || merge_class_lists(&[
                    "border-2 border-dashed rounded-lg p-8 text-center transition-colors",
                    if drag_active.get() {
                        "border-primary-500 bg-primary-50"
                    } else {
                        "border-gray-300"
                    },
                    if disabled.get() {
                        "opacity-50 cursor-not-allowed bg-gray-50"
                    } else {
                        "cursor-pointer hover:border-primary-500"
                    },
                ])
                on:dragover=move |event| {
                    event.prevent_default();
                    if !disabled.get_untracked() {
                        drag_active.set(true);
                    }
                }
                on:dragleave=move |_| drag_active.set(false)
                on:drop=move |event| {
                    event.prevent_default();
                    drag_active.set(false);
                    if disabled.get_untracked() {
                        return;
                    }
                    let dropped = event
                        .data_transfer()
                        .and_then(|transfer| transfer.files());
                    handle_files.call(files_from_list(dropped));
                }
            >
                <label class="flex flex-col items-center">
                    <Icon
                        icon=IconName::Upload
                        size=IconSize::Lg
                        class="mb-2 text-gray-400"
                    />
                    <span class="font-semibold text-gray-600">
                        {move || if drag_active.get() { "Drop files here..." } else { "Upload files" }}
                    </span>
                    <HiddenFileInput
                        accept=accept.clone()
                        multiple=multiple
                        disabled=disabled
                        on_files=handle_files
                    />
                    <span class="text-gray-500 mt-1">
                        {if max_files > 1 {
                            format!("Up to {max_files} files")
                        } else {
                            "Single file".to_string()
                        }}
                    </span>
                    <p class="text-xs text-gray-400 mt-2">
                        {format!("Accepts {accepted_summary}")}
                    </p>
                </label>
            </div>
        }
        .into_view(),
        FileUploadVariant::Default => view! {
            <label>
                <Button
                    style=ButtonStyle::Primary
                    variant=ButtonVariant::Solid
                    disabled=disabled
                    as_child=ChildRoot::new(RootTag::Span)
                        .attr("class", "flex items-center gap-2 cursor-pointer")
                >
                    <Icon icon=IconName::Upload size=IconSize::Sm />
                    "Upload file"
                    <HiddenFileInput
                        accept=accept.clone()
                        multiple=multiple
                        disabled=disabled
                        on_files=handle_files
                    />
                </Button>
            </label>
        }
        .into_view(),
    };

    let container_class = merge_class_lists(&["w-full", class.as_deref().unwrap_or("")]);

    view! {
        <div
            class=container_class
            data-ui-kind="file-upload"
            data-ui-variant=variant.token()
            data-ui-disabled=move || bool_token(disabled.get())
        >
            {surface}
            {move || {
                selected
                    .get()
                    .into_iter()
                    .enumerate()
                    .map(|(index, file)| {
                        view! {
                            <div class="flex items-center gap-2 mt-2 text-sm text-gray-600">
                                <button
                                    type="button"
                                    class="p-1 text-red-500 hover:text-red-700 rounded-full"
                                    aria-label="Remove file"
                                    on:click=move |_| remove_file(index)
                                >
                                    <Icon icon=IconName::Close size=IconSize::Sm />
                                </button>
                                <span class="truncate">{file.name}</span>
                            </div>
                        }
                    })
                    .collect_view()
            }}
            {move || {
                rejection.get().map(|reason| {
                    view! {
                        <p class="text-sm text-red-500 mt-2" role="alert">
                            {reason.to_string()}
                        </p>
                    }
                })
            }}
        </div>
    }
}
