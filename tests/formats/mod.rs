mod tests_files;
mod tests_graph_formats;
