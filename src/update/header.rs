//! Header resize update functions
//!
//! Resizing is view metadata: it is reported to the host but never recorded
//! in history.

use crate::commands::Cmd;
use crate::messages::HeaderMsg;
use crate::model::TableModel;

use super::blocked;

/// Handle header messages
pub fn update_header(model: &mut TableModel, msg: HeaderMsg) -> Option<Cmd> {
    match msg {
        HeaderMsg::ResizeColumn { index, width } => {
            let before = model.grid.column_width(index);
            let Some(applied) = model.grid.resize_column(index, width) else {
                return blocked("resize column", "header missing or not resizable");
            };
            if applied == before {
                return None;
            }
            let headers = model.grid.column_headers()?.to_vec();
            Some(Cmd::ColumnHeadersChanged(headers))
        }
        HeaderMsg::ResizeRow { index, height } => {
            let before = model.grid.row_height(index);
            let Some(applied) = model.grid.resize_row(index, height) else {
                return blocked("resize row", "header missing or not resizable");
            };
            if applied == before {
                return None;
            }
            let headers = model.grid.row_headers()?.to_vec();
            Some(Cmd::RowHeadersChanged(headers))
        }
        HeaderMsg::FinishColumnResize { index } => {
            let header = model.grid.column_headers()?.get(index)?;
            if !header.can_resize {
                return None;
            }
            Some(Cmd::ColumnResized {
                index,
                width: header.effective_width(),
            })
        }
        HeaderMsg::FinishRowResize { index } => {
            let header = model.grid.row_headers()?.get(index)?;
            if !header.can_resize {
                return None;
            }
            Some(Cmd::RowResized {
                index,
                height: header.effective_height(),
            })
        }
    }
}
