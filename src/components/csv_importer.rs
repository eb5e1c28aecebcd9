use gloo_console::error;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::components::icons::*;
use crate::format::{format_brl, format_file_size};
use crate::import::{preview_csv, Bank, CsvPreview, BANKS, MAX_FILE_BYTES};
use crate::services::accounts;

#[derive(Clone, PartialEq)]
enum ImportStatus {
    Idle,
    Uploading,
    Success { message: String, details: String },
    Error { message: String, details: String },
}

#[derive(Properties, PartialEq)]
pub struct CsvImporterProps {
    pub on_close: Callback<()>,
    pub on_import_success: Callback<()>,
}

#[function_component(CsvImporter)]
pub fn csv_importer(props: &CsvImporterProps) -> Html {
    let selected_file = use_state(|| None::<web_sys::File>);
    let bank = use_state(|| Bank::C6);
    let status = use_state(|| ImportStatus::Idle);
    let preview = use_state(|| None::<CsvPreview>);

    let uploading = matches!(*status, ImportStatus::Uploading);
    let succeeded = matches!(*status, ImportStatus::Success { .. });

    let run_preview = {
        let status = status.clone();
        let preview = preview.clone();
        move |file: web_sys::File, bank: Bank| {
            let status = status.clone();
            let preview = preview.clone();
            spawn_local(async move {
                let gloo_file = gloo_file::File::from(file);
                match gloo_file::futures::read_as_text(&gloo_file).await {
                    Ok(text) => match preview_csv(bank, &text) {
                        Ok(parsed) => preview.set(Some(parsed)),
                        Err(err) => {
                            preview.set(None);
                            status.set(ImportStatus::Error {
                                message: "Arquivo não reconhecido".to_string(),
                                details: err.to_string(),
                            });
                        }
                    },
                    Err(err) => {
                        error!(format!("falha ao ler o arquivo: {}", err));
                        preview.set(None);
                        status.set(ImportStatus::Error {
                            message: "Erro ao ler o arquivo".to_string(),
                            details: "Não foi possível ler o conteúdo do arquivo.".to_string(),
                        });
                    }
                }
            });
        }
    };

    let on_file_change = {
        let selected_file = selected_file.clone();
        let status = status.clone();
        let preview = preview.clone();
        let bank = bank.clone();
        let run_preview = run_preview.clone();
        Callback::from(move |e: Event| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            let Some(file) = input.files().and_then(|files| files.get(0)) else {
                return;
            };

            if !file.name().to_lowercase().ends_with(".csv") {
                status.set(ImportStatus::Error {
                    message: "Formato inválido".to_string(),
                    details: "Por favor, selecione um arquivo CSV (.csv)".to_string(),
                });
                return;
            }
            if file.size() > MAX_FILE_BYTES {
                status.set(ImportStatus::Error {
                    message: "Arquivo muito grande".to_string(),
                    details: "O arquivo deve ter no máximo 5MB".to_string(),
                });
                return;
            }

            status.set(ImportStatus::Idle);
            preview.set(None);
            selected_file.set(Some(file.clone()));
            run_preview(file, *bank);
        })
    };

    let on_remove_file = {
        let selected_file = selected_file.clone();
        let status = status.clone();
        let preview = preview.clone();
        Callback::from(move |_| {
            selected_file.set(None);
            preview.set(None);
            status.set(ImportStatus::Idle);
        })
    };

    let on_import = {
        let selected_file = selected_file.clone();
        let bank = bank.clone();
        let status = status.clone();
        let on_import_success = props.on_import_success.clone();
        Callback::from(move |_| {
            let Some(file) = (*selected_file).clone() else {
                status.set(ImportStatus::Error {
                    message: "Nenhum arquivo selecionado".to_string(),
                    details: "Por favor, selecione um arquivo CSV para importar".to_string(),
                });
                return;
            };

            status.set(ImportStatus::Uploading);
            let bank_val = *bank;
            let status = status.clone();
            let on_import_success = on_import_success.clone();
            spawn_local(async move {
                match accounts::import_csv(&file, bank_val).await {
                    Ok(outcome) => {
                        status.set(ImportStatus::Success {
                            message: "Importação concluída com sucesso!".to_string(),
                            details: format!("{} contas foram importadas", outcome.imported),
                        });
                        on_import_success.emit(());
                    }
                    Err(err) => {
                        error!(format!("falha na importação: {}", err));
                        status.set(ImportStatus::Error {
                            message: "Erro na importação".to_string(),
                            details: err.to_string(),
                        });
                    }
                }
            });
        })
    };

    let on_close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_| on_close.emit(()))
    };

    html! {
        <div class="fixed inset-0 bg-black bg-opacity-50 flex items-center justify-center p-4 z-50">
            <div class="bg-white rounded-xl max-w-lg w-full max-h-[90vh] overflow-y-auto">
                <div class="p-6">
                    <div class="flex items-center justify-between mb-6">
                        <div class="flex items-center gap-3">
                            <div class="p-2 bg-blue-100 rounded-lg text-blue-600">{ icon_upload() }</div>
                            <div>
                                <h2 class="text-xl font-bold text-gray-900">{"Importar Contas"}</h2>
                                <p class="text-sm text-gray-600">{"Importe contas de um arquivo CSV"}</p>
                            </div>
                        </div>
                        <button
                            onclick={on_close.clone()}
                            disabled={uploading}
                            class="p-2 hover:bg-gray-100 rounded-lg transition-colors duration-200"
                        >
                            { icon_x() }
                        </button>
                    </div>

                    <div class="mb-6">
                        <label class="block text-sm font-medium text-gray-700 mb-3">{"Selecione o banco *"}</label>
                        <div class="space-y-2">
                            { for BANKS.iter().map(|option| {
                                let on_bank = {
                                    let bank = bank.clone();
                                    let preview = preview.clone();
                                    let selected_file = selected_file.clone();
                                    let run_preview = run_preview.clone();
                                    let option = *option;
                                    Callback::from(move |_| {
                                        bank.set(option);
                                        // re-run the preview under the newly chosen profile
                                        if let Some(file) = (*selected_file).clone() {
                                            preview.set(None);
                                            run_preview(file, option);
                                        }
                                    })
                                };
                                html! {
                                    <label class="flex items-center p-3 border border-gray-200 rounded-lg hover:bg-gray-50 cursor-pointer transition-colors duration-200">
                                        <input
                                            type="radio"
                                            name="bank"
                                            checked={*bank == *option}
                                            onclick={on_bank}
                                            disabled={uploading}
                                            class="w-4 h-4 text-blue-600"
                                        />
                                        <div class="ml-3">
                                            <div class="text-sm font-medium text-gray-900">{ option.label() }</div>
                                            <div class="text-xs text-gray-500">{ option.description() }</div>
                                        </div>
                                    </label>
                                }
                            }) }
                        </div>
                    </div>

                    <div class="mb-6">
                        <label class="block text-sm font-medium text-gray-700 mb-3">{"Arquivo CSV *"}</label>
                        {
                            if let Some(file) = &*selected_file {
                                html! {
                                    <div class="border border-gray-200 rounded-lg p-4">
                                        <div class="flex items-center justify-between">
                                            <div class="flex items-center gap-3">
                                                <span class="text-blue-600">{ icon_file_text() }</span>
                                                <div>
                                                    <p class="text-sm font-medium text-gray-900">{ file.name() }</p>
                                                    <p class="text-xs text-gray-500">{ format_file_size(file.size()) }</p>
                                                </div>
                                            </div>
                                            if !uploading {
                                                <button onclick={on_remove_file} class="p-1 hover:bg-gray-100 rounded text-gray-500">
                                                    { icon_x() }
                                                </button>
                                            }
                                        </div>
                                        {
                                            if let Some(parsed) = &*preview {
                                                html! {
                                                    <div class="mt-3 pt-3 border-t border-gray-100 text-xs text-gray-600 space-y-1">
                                                        <p>{ format!("{} lançamentos prontos para importar", parsed.importable) }</p>
                                                        if parsed.skipped > 0 {
                                                            <p class="text-yellow-700">{ format!("{} linhas serão ignoradas", parsed.skipped) }</p>
                                                        }
                                                        <p>
                                                            { format!("Entradas: {} · Saídas: {}",
                                                                format_brl(parsed.income_total),
                                                                format_brl(parsed.expense_total)) }
                                                        </p>
                                                    </div>
                                                }
                                            } else {
                                                html! {}
                                            }
                                        }
                                    </div>
                                }
                            } else {
                                html! {
                                    <label class="block border-2 border-dashed border-gray-300 rounded-lg p-8 text-center hover:border-blue-400 transition-colors duration-200 cursor-pointer">
                                        <div class="flex justify-center text-gray-400 mb-4">{ icon_file_text() }</div>
                                        <p class="text-sm text-gray-600 mb-2">{"Clique para selecionar o arquivo"}</p>
                                        <p class="text-xs text-gray-500">{"Apenas arquivos CSV (máximo 5MB)"}</p>
                                        <input
                                            type="file"
                                            accept=".csv"
                                            onchange={on_file_change}
                                            disabled={uploading}
                                            class="hidden"
                                        />
                                    </label>
                                }
                            }
                        }
                    </div>

                    {
                        match &*status {
                            ImportStatus::Idle => html! {},
                            ImportStatus::Uploading => html! {
                                <div class="mb-6 p-4 rounded-lg flex items-start gap-3 bg-blue-50 border border-blue-200">
                                    <div class="w-5 h-5 border-2 border-blue-600 border-t-transparent rounded-full animate-spin mt-0.5"></div>
                                    <p class="text-sm font-medium text-blue-800">{"Enviando arquivo..."}</p>
                                </div>
                            },
                            ImportStatus::Success { message, details } => html! {
                                <div class="mb-6 p-4 rounded-lg flex items-start gap-3 bg-green-50 border border-green-200">
                                    <span class="text-green-600">{ icon_check_circle() }</span>
                                    <div>
                                        <p class="text-sm font-medium text-green-800">{ message.clone() }</p>
                                        <p class="text-xs mt-1 text-green-600">{ details.clone() }</p>
                                    </div>
                                </div>
                            },
                            ImportStatus::Error { message, details } => html! {
                                <div class="mb-6 p-4 rounded-lg flex items-start gap-3 bg-red-50 border border-red-200">
                                    <span class="text-red-600">{ icon_alert_circle() }</span>
                                    <div>
                                        <p class="text-sm font-medium text-red-800">{ message.clone() }</p>
                                        <p class="text-xs mt-1 text-red-600">{ details.clone() }</p>
                                    </div>
                                </div>
                            },
                        }
                    }

                    <div class="mb-6 p-4 bg-gray-50 rounded-lg">
                        <h4 class="text-sm font-medium text-gray-900 mb-2">{"Instruções:"}</h4>
                        <ul class="text-xs text-gray-600 space-y-1">
                            <li>{"• Exporte o extrato do seu banco em formato CSV"}</li>
                            <li>{"• Selecione o banco correspondente ao arquivo"}</li>
                            <li>{"• O arquivo será processado e as contas importadas automaticamente"}</li>
                            <li>{"• Contas duplicadas serão ignoradas"}</li>
                        </ul>
                    </div>

                    <div class="flex gap-3">
                        <button
                            onclick={on_import}
                            disabled={selected_file.is_none() || uploading || succeeded}
                            class="flex-1 bg-blue-600 text-white px-4 py-2 rounded-lg hover:bg-blue-700 transition-all duration-200 flex items-center justify-center gap-2 disabled:opacity-50 disabled:cursor-not-allowed"
                        >
                            { icon_upload() }
                            { if uploading { "Importando..." } else { "Importar Contas" } }
                        </button>
                        <button
                            onclick={on_close}
                            disabled={uploading}
                            class="flex-1 bg-gray-100 text-gray-700 px-4 py-2 rounded-lg hover:bg-gray-200 transition-all duration-200 disabled:opacity-50 disabled:cursor-not-allowed"
                        >
                            { if succeeded { "Fechar" } else { "Cancelar" } }
                        </button>
                    </div>
                </div>
            </div>
        </div>
    }
}
