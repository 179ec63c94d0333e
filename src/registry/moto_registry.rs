//! Registro de motos em memória
//!
//! Este módulo implementa o MotoRegistry: um mapa compartilhado id -> Moto
//! com alocação monotônica de ids e unicidade de placa. Todo o estado vive
//! na memória do processo e é perdido no restart.

use std::collections::HashMap;
use std::sync::atomic::{AtomicI32, Ordering};
use std::sync::Arc;

use chrono::Utc;
use thiserror::Error;
use tokio::sync::RwLock;
use tracing::debug;

use crate::models::moto::{Moto, MotoInput, StatusMoto};

/// Falhas das operações do registro
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("moto {0} não encontrada")]
    NotFound(i32),

    #[error("placa {0} já cadastrada")]
    DuplicatePlate(String),
}

/// Registro thread-safe de motos
///
/// Clonar o registro é barato e todas as cópias compartilham o mesmo mapa.
/// As verificações de placa em `create` e `update` rodam segurando o write
/// lock, junto com a mutação; duas criações concorrentes com a mesma placa
/// nunca passam as duas pela checagem.
#[derive(Clone)]
pub struct MotoRegistry {
    motos: Arc<RwLock<HashMap<i32, Moto>>>,
    next_id: Arc<AtomicI32>,
}

impl Default for MotoRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl MotoRegistry {
    pub fn new() -> Self {
        Self {
            motos: Arc::new(RwLock::new(HashMap::new())),
            next_id: Arc::new(AtomicI32::new(1)),
        }
    }

    /// Listar todas as motos, ordenadas por id crescente
    ///
    /// A ordenação é calculada na leitura; o mapa não mantém ordem.
    pub async fn list(&self) -> Vec<Moto> {
        let motos = self.motos.read().await;
        let mut result: Vec<Moto> = motos.values().cloned().collect();
        drop(motos);
        result.sort_by_key(|m| m.id);
        result
    }

    /// Buscar uma moto por id
    pub async fn get_by_id(&self, id: i32) -> Option<Moto> {
        self.motos.read().await.get(&id).cloned()
    }

    /// Cadastrar uma nova moto
    ///
    /// Atribui o próximo id, marca a data de criação (UTC) e força o status
    /// para DISPONIVEL, ignorando o status enviado pelo cliente. Falha com
    /// `DuplicatePlate` se já existir moto com a mesma placa.
    pub async fn create(&self, input: MotoInput) -> Result<Moto, RegistryError> {
        let mut motos = self.motos.write().await;

        if motos.values().any(|m| m.placa == input.placa) {
            return Err(RegistryError::DuplicatePlate(input.placa));
        }

        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let moto = Moto {
            id,
            ano: input.ano,
            modelo: input.modelo,
            placa: input.placa,
            status: StatusMoto::Disponivel,
            data_criacao: Utc::now(),
            data_atualizacao: None,
        };

        motos.insert(id, moto.clone());
        debug!("Moto {} cadastrada com placa {}", moto.id, moto.placa);
        Ok(moto)
    }

    /// Atualizar uma moto existente
    ///
    /// Substitui ano, modelo, placa e status e marca a data de atualização;
    /// id e data de criação são preservados. Falha com `NotFound` se o id
    /// não existir e com `DuplicatePlate` se outra moto (id diferente) já
    /// tiver a placa enviada. Transições de status não são validadas.
    pub async fn update(&self, id: i32, input: MotoInput) -> Result<Moto, RegistryError> {
        let mut motos = self.motos.write().await;

        if !motos.contains_key(&id) {
            return Err(RegistryError::NotFound(id));
        }

        if motos.values().any(|m| m.id != id && m.placa == input.placa) {
            return Err(RegistryError::DuplicatePlate(input.placa));
        }

        // contains_key garantiu a presença da chave
        let moto = motos
            .get_mut(&id)
            .ok_or(RegistryError::NotFound(id))?;

        moto.ano = input.ano;
        moto.modelo = input.modelo;
        moto.placa = input.placa;
        moto.status = input.status.unwrap_or(StatusMoto::Disponivel);
        moto.data_atualizacao = Some(Utc::now());

        debug!("Moto {} atualizada", id);
        Ok(moto.clone())
    }

    /// Remover uma moto permanentemente
    pub async fn delete(&self, id: i32) -> Result<(), RegistryError> {
        let mut motos = self.motos.write().await;
        match motos.remove(&id) {
            Some(_) => {
                debug!("Moto {} removida", id);
                Ok(())
            }
            None => Err(RegistryError::NotFound(id)),
        }
    }
}
