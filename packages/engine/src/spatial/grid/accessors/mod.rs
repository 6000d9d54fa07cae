mod cells;
mod bulk;
mod pointers;
