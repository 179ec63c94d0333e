//! Modelo de Moto
//!
//! Este módulo contém o struct Moto e os tipos de payload para as
//! operações CRUD. Os nomes dos campos seguem o contrato JSON da API
//! (ano, modelo, placa, dataCriacao, dataAtualizacao).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Status da moto - serializado com os nomes em português do contrato
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StatusMoto {
    Disponivel,
    EmUso,
    EmManutencao,
    Inativa,
}

/// Moto armazenada no registro
///
/// `id` e `data_criacao` são atribuídos pelo registro na criação e nunca
/// mudam; `data_atualizacao` fica nula até a primeira atualização.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Moto {
    pub id: i32,
    pub ano: i32,
    pub modelo: String,
    pub placa: String,
    pub status: StatusMoto,
    #[serde(rename = "dataCriacao")]
    pub data_criacao: DateTime<Utc>,
    #[serde(rename = "dataAtualizacao")]
    pub data_atualizacao: Option<DateTime<Utc>>,
}

/// Payload de criação/atualização de moto
///
/// Na criação o status enviado pelo cliente é ignorado (toda moto nova
/// entra como DISPONIVEL). Na atualização, status ausente equivale a
/// DISPONIVEL.
#[derive(Debug, Clone, Deserialize)]
pub struct MotoInput {
    pub ano: i32,
    pub modelo: String,
    pub placa: String,
    #[serde(default)]
    pub status: Option<StatusMoto>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn status_serializa_com_nomes_do_contrato() {
        assert_eq!(
            serde_json::to_value(StatusMoto::Disponivel).unwrap(),
            json!("DISPONIVEL")
        );
        assert_eq!(
            serde_json::to_value(StatusMoto::EmUso).unwrap(),
            json!("EM_USO")
        );
        assert_eq!(
            serde_json::to_value(StatusMoto::EmManutencao).unwrap(),
            json!("EM_MANUTENCAO")
        );
        assert_eq!(
            serde_json::to_value(StatusMoto::Inativa).unwrap(),
            json!("INATIVA")
        );
    }

    #[test]
    fn moto_serializa_campos_do_contrato() {
        let moto = Moto {
            id: 1,
            ano: 2023,
            modelo: "CG 160".to_string(),
            placa: "ABC1234".to_string(),
            status: StatusMoto::Disponivel,
            data_criacao: Utc::now(),
            data_atualizacao: None,
        };

        let value = serde_json::to_value(&moto).unwrap();
        assert_eq!(value["id"], json!(1));
        assert_eq!(value["ano"], json!(2023));
        assert_eq!(value["modelo"], json!("CG 160"));
        assert_eq!(value["placa"], json!("ABC1234"));
        assert_eq!(value["status"], json!("DISPONIVEL"));
        assert!(value["dataCriacao"].is_string());
        assert!(value["dataAtualizacao"].is_null());
    }

    #[test]
    fn input_aceita_status_ausente() {
        let input: MotoInput =
            serde_json::from_value(json!({"ano": 2022, "modelo": "XRE 300", "placa": "XYZ9999"}))
                .unwrap();
        assert_eq!(input.status, None);
    }
}
