//! Subcommand implementations.

use std::path::Path;

use twinfield_common::{Result, TwinfieldError};
use twinfield_config::{config_to_json, TwinfieldConfig};
use twinfield_factory::{Endpoint, ResourceFactory, Response};

pub fn show_config(config: &TwinfieldConfig) {
    println!("{}", config_to_json(config));
}

/// Log on and return the ProcessXml address the session resolved to.
pub async fn logon(config: TwinfieldConfig) -> Result<String> {
    let factory: ResourceFactory = new_factory(config)?;

    let client = factory
        .client(Endpoint::PROCESS_XML)
        .await
        .map_err(|e| TwinfieldError::Session(e.to_string()))?;

    let cluster = factory.session().cluster().await.unwrap_or_default();
    println!("logged on, cluster: {cluster}");
    println!("processxml endpoint: {}", client.address());
    Ok(client.address().to_string())
}

pub async fn process(config: TwinfieldConfig, file: &Path) -> Result<()> {
    let document = std::fs::read_to_string(file)?;
    let mut factory: ResourceFactory = new_factory(config)?;

    let response = factory
        .service()
        .send(&document)
        .await
        .map_err(|e| TwinfieldError::Session(e.to_string()))?;
    factory.set_response(response);

    let response = factory
        .response()
        .map_err(|e| TwinfieldError::Factory(e.to_string()))?;
    print_response(response);

    if response.is_successful() {
        Ok(())
    } else {
        Err(TwinfieldError::Rejected(
            response.error_messages().join("; "),
        ))
    }
}

fn new_factory(config: TwinfieldConfig) -> Result<ResourceFactory> {
    ResourceFactory::new(config).map_err(|e| TwinfieldError::Factory(e.to_string()))
}

fn print_response(response: &Response) {
    println!("{}", response.xml());
    for msg in response.error_messages() {
        eprintln!("error: {msg}");
    }
    for msg in response.warning_messages() {
        eprintln!("warning: {msg}");
    }
}
