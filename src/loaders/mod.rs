pub mod ldtk;
