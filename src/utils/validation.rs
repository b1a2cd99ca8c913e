/// Vazio depois de remover espaços das pontas
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}
