mod identity;
mod operation;
mod operation_result;
mod status_class;
