use crate::digest::{Digester, DigesterDetail};
use crate::error::{Result, SimError};
use indexmap::IndexMap;

/// One table size paired with one registered digester.
pub struct TableConfig<'a> {
    pub table_size: usize,
    pub digest_name: &'a str,
    pub digester: &'a dyn Digester,
}

impl TableConfig<'_> {
    pub fn label(&self) -> String {
        format!("{}/{}", self.digest_name, self.table_size)
    }
}

/// Resolves every digest name × table size combination, digest-major.
///
/// Every name and size is checked before anything is returned, so a bad
/// entry anywhere fails the whole plan and no simulation starts.
pub fn table_configs<'a>(
    registry: &'a IndexMap<&'static str, DigesterDetail>,
    digest_names: &'a [String],
    table_sizes: &[usize],
) -> Result<Vec<TableConfig<'a>>> {
    for &table_size in table_sizes {
        SimError::check_positive("table_size", table_size)?;
    }

    let mut configs = Vec::with_capacity(digest_names.len() * table_sizes.len());
    for name in digest_names {
        let detail = registry
            .get(name.as_str())
            .ok_or_else(|| SimError::UnknownDigester { name: name.clone() })?;
        for &table_size in table_sizes {
            configs.push(TableConfig {
                table_size,
                digest_name: name,
                digester: detail.digester.as_ref(),
            });
        }
    }
    Ok(configs)
}
