use id_arena::{Arena, Id};

use super::{definition::_Definition, scope::_Scope, variable::_Variable};

#[derive(Default)]
pub struct AllArenas<'a> {
    pub scopes: Arena<_Scope<'a>>,
    pub variables: Arena<_Variable<'a>>,
    pub definitions: Arena<_Definition<'a>>,
}

impl<'a> AllArenas<'a> {
    pub fn get_scope(&self, id: Id<_Scope<'a>>) -> &_Scope<'a> {
        &self.scopes[id]
    }

    pub fn get_scope_mut(&mut self, id: Id<_Scope<'a>>) -> &mut _Scope<'a> {
        &mut self.scopes[id]
    }

    pub fn get_variable(&self, id: Id<_Variable<'a>>) -> &_Variable<'a> {
        &self.variables[id]
    }

    pub fn get_definition(&self, id: Id<_Definition<'a>>) -> &_Definition<'a> {
        &self.definitions[id]
    }
}
