use super::super::cst::{NodeId, NodeKind};
use super::super::error::VhdlError;
use super::super::token::{Delimiter, Keyword};
use super::VhdlParser;

impl VhdlParser {
    // --- sequential statements -----------------------------------------------

    /// Parses sequential statements until one of the region-closing keywords
    /// (`end`, `elsif`, `else`, `when`) comes up.
    pub(super) fn parse_sequence_of_statements(&mut self) -> Result<Vec<NodeId>, VhdlError> {
        let mut statements = Vec::new();
        loop {
            if self.peek().is_eof() == true {
                return Err(self.err_expected(&["end"]));
            }
            if self.peek_kw(&Keyword::End) == true
                || self.peek_kw(&Keyword::Elsif) == true
                || self.peek_kw(&Keyword::Else) == true
                || self.peek_kw(&Keyword::When) == true
            {
                break;
            }
            statements.push(self.parse_sequential_statement()?);
        }
        Ok(statements)
    }

    fn parse_label_opt(&mut self) -> Result<Option<NodeId>, VhdlError> {
        match self.is_identifier() == true && self.peek_at(1).check_delimiter(&Delimiter::Colon) {
            true => {
                let label = self.expect_identifier()?;
                self.expect_delim(&Delimiter::Colon)?;
                Ok(Some(label))
            }
            false => Ok(None),
        }
    }

    fn parse_sequential_statement(&mut self) -> Result<NodeId, VhdlError> {
        let label = self.parse_label_opt()?;
        let item = if self.peek_kw(&Keyword::Wait) == true {
            self.parse_wait_statement(label)?
        } else if self.peek_kw(&Keyword::Assert) == true {
            let assertion = self.parse_assertion()?;
            self.expect_delim(&Delimiter::Terminator)?;
            self.push(NodeKind::AssertionStatement {
                label: label,
                assertion: assertion,
            })
        } else if self.peek_kw(&Keyword::Report) == true {
            self.advance();
            let expression = self.parse_expression()?;
            let severity = match self.accept_kw(&Keyword::Severity) {
                Some(_) => Some(self.parse_expression()?),
                None => None,
            };
            self.expect_delim(&Delimiter::Terminator)?;
            self.push(NodeKind::ReportStatement {
                label: label,
                expression: expression,
                severity: severity,
            })
        } else if self.peek_kw(&Keyword::If) == true {
            self.parse_if_statement(label)?
        } else if self.peek_kw(&Keyword::Case) == true {
            self.parse_case_statement(label)?
        } else if self.peek_kw(&Keyword::For) == true
            || self.peek_kw(&Keyword::While) == true
            || self.peek_kw(&Keyword::Loop) == true
        {
            self.parse_loop_statement(label)?
        } else if self.peek_kw(&Keyword::Next) == true {
            self.advance();
            let loop_label = self.accept_identifier();
            let condition = match self.accept_kw(&Keyword::When) {
                Some(_) => Some(self.parse_expression()?),
                None => None,
            };
            self.expect_delim(&Delimiter::Terminator)?;
            self.push(NodeKind::NextStatement {
                label: label,
                loop_label: loop_label,
                condition: condition,
            })
        } else if self.peek_kw(&Keyword::Exit) == true {
            self.advance();
            let loop_label = self.accept_identifier();
            let condition = match self.accept_kw(&Keyword::When) {
                Some(_) => Some(self.parse_expression()?),
                None => None,
            };
            self.expect_delim(&Delimiter::Terminator)?;
            self.push(NodeKind::ExitStatement {
                label: label,
                loop_label: loop_label,
                condition: condition,
            })
        } else if self.peek_kw(&Keyword::Return) == true {
            self.advance();
            let expression = match self.peek_delim(&Delimiter::Terminator) {
                true => None,
                false => Some(self.parse_expression()?),
            };
            self.expect_delim(&Delimiter::Terminator)?;
            self.push(NodeKind::ReturnStatement {
                label: label,
                expression: expression,
            })
        } else if self.peek_kw(&Keyword::Null) == true {
            self.advance();
            self.expect_delim(&Delimiter::Terminator)?;
            self.push(NodeKind::NullStatement { label: label })
        } else {
            self.parse_assignment_or_call(label)?
        };
        Ok(self.push(NodeKind::SequentialStatement { item: item }))
    }

    fn parse_assignment_or_call(&mut self, label: Option<NodeId>) -> Result<NodeId, VhdlError> {
        let target = self.parse_target()?;
        if self.accept_delim(&Delimiter::SigAssign) == true {
            let assignment = if self.peek_kw(&Keyword::Force) == true {
                self.advance();
                let force_mode = match self.peek_kw(&Keyword::In) || self.peek_kw(&Keyword::Out) {
                    true => Some(self.take_terminal()),
                    false => None,
                };
                let expression = self.parse_expression()?;
                self.push(NodeKind::SimpleForceAssignment {
                    target: target,
                    force_mode: force_mode,
                    expression: expression,
                })
            } else if self.peek_kw(&Keyword::Release) == true {
                self.advance();
                let force_mode = match self.peek_kw(&Keyword::In) || self.peek_kw(&Keyword::Out) {
                    true => Some(self.take_terminal()),
                    false => None,
                };
                self.push(NodeKind::SimpleReleaseAssignment {
                    target: target,
                    force_mode: force_mode,
                })
            } else {
                let delay = self.parse_delay_mechanism_opt()?;
                let waveform = self.parse_waveform()?;
                self.push(NodeKind::SimpleWaveformAssignment {
                    target: target,
                    delay: delay,
                    waveform: waveform,
                })
            };
            self.expect_delim(&Delimiter::Terminator)?;
            let simple = self.push(NodeKind::SimpleSignalAssignment { item: assignment });
            return Ok(self.push(NodeKind::SignalAssignmentStatement {
                label: label,
                assignment: simple,
            }));
        }
        if self.accept_delim(&Delimiter::VarAssign) == true {
            let expression = self.parse_expression()?;
            self.expect_delim(&Delimiter::Terminator)?;
            let simple = self.push(NodeKind::SimpleVariableAssignment {
                target: target,
                expression: expression,
            });
            return Ok(self.push(NodeKind::VariableAssignmentStatement {
                label: label,
                assignment: simple,
            }));
        }
        // neither assignment symbol: a procedure call
        let name = match self.tree.get(target) {
            NodeKind::Target { target } => *target,
            _ => target,
        };
        let procedure_call = self.name_to_procedure_call(name);
        self.expect_delim(&Delimiter::Terminator)?;
        Ok(self.push(NodeKind::ProcedureCallStatement {
            label: label,
            procedure_call: procedure_call,
        }))
    }

    /// Re-reads an applied name as a procedure call.
    pub(super) fn name_to_procedure_call(&mut self, name: NodeId) -> NodeId {
        let parts = match self.tree.get(name) {
            NodeKind::Name { name_val } => match self.tree.get(*name_val) {
                NodeKind::IndexedName {
                    prefix,
                    expressions,
                } => Some((*prefix, expressions.clone())),
                _ => None,
            },
            _ => None,
        };
        match parts {
            Some((prefix, expressions)) => {
                let callee = match self.tree.get(prefix) {
                    NodeKind::Prefix { name } => *name,
                    _ => prefix,
                };
                let mut params = Vec::new();
                for e in &expressions {
                    params.push(self.as_association_element(*e));
                }
                self.push(NodeKind::ProcedureCall {
                    procedure_name: callee,
                    actual_parameter_part: params,
                })
            }
            None => self.push(NodeKind::ProcedureCall {
                procedure_name: name,
                actual_parameter_part: Vec::new(),
            }),
        }
    }

    fn parse_target(&mut self) -> Result<NodeId, VhdlError> {
        let inner = match self.peek_delim(&Delimiter::ParenL) {
            true => self.parse_aggregate_or_paren()?,
            false => self.parse_name()?,
        };
        Ok(self.push(NodeKind::Target { target: inner }))
    }

    fn parse_waveform(&mut self) -> Result<NodeId, VhdlError> {
        if self.peek_kw(&Keyword::Unaffected) == true {
            let t = self.take_terminal();
            return Ok(self.push(NodeKind::Waveform { elements: vec![t] }));
        }
        let mut elements = Vec::new();
        loop {
            let value = self.parse_expression()?;
            let time = match self.accept_kw(&Keyword::After) {
                Some(_) => Some(self.parse_expression()?),
                None => None,
            };
            elements.push(self.push(NodeKind::WaveformElement {
                value: value,
                time: time,
            }));
            if self.accept_delim(&Delimiter::Comma) == false {
                break;
            }
        }
        Ok(self.push(NodeKind::Waveform { elements: elements }))
    }

    fn parse_delay_mechanism_opt(&mut self) -> Result<Option<NodeId>, VhdlError> {
        if self.peek_kw(&Keyword::Transport) == true {
            let mechanism = self.take_terminal();
            return Ok(Some(self.push(NodeKind::DelayMechanism {
                time_expression: None,
                mechanism: mechanism,
            })));
        }
        if self.peek_kw(&Keyword::Reject) == true {
            self.advance();
            let time_expression = self.parse_expression()?;
            let mechanism = self.expect_kw(&Keyword::Inertial)?;
            return Ok(Some(self.push(NodeKind::DelayMechanism {
                time_expression: Some(time_expression),
                mechanism: mechanism,
            })));
        }
        if self.peek_kw(&Keyword::Inertial) == true {
            let mechanism = self.take_terminal();
            return Ok(Some(self.push(NodeKind::DelayMechanism {
                time_expression: None,
                mechanism: mechanism,
            })));
        }
        Ok(None)
    }

    fn parse_assertion(&mut self) -> Result<NodeId, VhdlError> {
        self.expect_kw(&Keyword::Assert)?;
        let condition = self.parse_expression()?;
        let report = match self.accept_kw(&Keyword::Report) {
            Some(_) => Some(self.parse_expression()?),
            None => None,
        };
        let severity = match self.accept_kw(&Keyword::Severity) {
            Some(_) => Some(self.parse_expression()?),
            None => None,
        };
        Ok(self.push(NodeKind::Assertion {
            condition: condition,
            report: report,
            severity: severity,
        }))
    }

    fn parse_wait_statement(&mut self, label: Option<NodeId>) -> Result<NodeId, VhdlError> {
        self.expect_kw(&Keyword::Wait)?;
        let mut sensitivity_clause = Vec::new();
        if self.accept_kw(&Keyword::On).is_some() == true {
            loop {
                sensitivity_clause.push(self.parse_name()?);
                if self.accept_delim(&Delimiter::Comma) == false {
                    break;
                }
            }
        }
        let condition_clause = match self.accept_kw(&Keyword::Until) {
            Some(_) => {
                let condition = self.parse_expression()?;
                Some(self.push(NodeKind::ConditionClause {
                    condition: condition,
                }))
            }
            None => None,
        };
        let timeout_clause = match self.accept_kw(&Keyword::For) {
            Some(_) => Some(self.parse_expression()?),
            None => None,
        };
        self.expect_delim(&Delimiter::Terminator)?;
        Ok(self.push(NodeKind::WaitStatement {
            label: label,
            sensitivity_clause: sensitivity_clause,
            condition_clause: condition_clause,
            timeout_clause: timeout_clause,
        }))
    }

    fn parse_if_statement(&mut self, label: Option<NodeId>) -> Result<NodeId, VhdlError> {
        self.expect_kw(&Keyword::If)?;
        let condition = self.parse_expression()?;
        self.expect_kw(&Keyword::Then)?;
        let if_branch_statements = self.parse_sequence_of_statements()?;
        let mut elsif_branches = Vec::new();
        while self.peek_kw(&Keyword::Elsif) == true {
            self.advance();
            let branch_condition = self.parse_expression()?;
            self.expect_kw(&Keyword::Then)?;
            let statements = self.parse_sequence_of_statements()?;
            elsif_branches.push(self.push(NodeKind::ElsifBranch {
                condition: branch_condition,
                statements: statements,
            }));
        }
        let (else_token, else_branch_statements) = match self.accept_kw(&Keyword::Else) {
            Some(t) => (Some(t), self.parse_sequence_of_statements()?),
            None => (None, Vec::new()),
        };
        self.expect_kw(&Keyword::End)?;
        self.expect_kw(&Keyword::If)?;
        let label_end = self.accept_identifier();
        self.expect_delim(&Delimiter::Terminator)?;
        Ok(self.push(NodeKind::IfStatement {
            label: label,
            condition: condition,
            if_branch_statements: if_branch_statements,
            elsif_branches: elsif_branches,
            else_token: else_token,
            else_branch_statements: else_branch_statements,
            label_end: label_end,
        }))
    }

    fn parse_case_statement(&mut self, label: Option<NodeId>) -> Result<NodeId, VhdlError> {
        self.expect_kw(&Keyword::Case)?;
        let qmark = self.accept_delim_terminal(&Delimiter::Question);
        let expression = self.parse_expression()?;
        self.expect_kw(&Keyword::Is)?;
        let mut alternatives = Vec::new();
        while self.peek_kw(&Keyword::When) == true {
            self.advance();
            let choices = self.parse_choices()?;
            self.expect_delim(&Delimiter::Arrow)?;
            let statements = self.parse_sequence_of_statements()?;
            alternatives.push(self.push(NodeKind::CaseStatementAlternative {
                choices: choices,
                statements: statements,
            }));
        }
        self.expect_kw(&Keyword::End)?;
        self.expect_kw(&Keyword::Case)?;
        let qmark_end = self.accept_delim_terminal(&Delimiter::Question);
        let label_end = self.accept_identifier();
        self.expect_delim(&Delimiter::Terminator)?;
        Ok(self.push(NodeKind::CaseStatement {
            label: label,
            qmark: qmark,
            expression: expression,
            alternatives: alternatives,
            qmark_end: qmark_end,
            label_end: label_end,
        }))
    }

    fn parse_loop_statement(&mut self, label: Option<NodeId>) -> Result<NodeId, VhdlError> {
        let iteration_scheme = if self.peek_kw(&Keyword::While) == true {
            self.advance();
            let spec = self.parse_expression()?;
            Some(self.push(NodeKind::IterationScheme { spec: spec }))
        } else if self.peek_kw(&Keyword::For) == true {
            self.advance();
            let spec = self.parse_parameter_specification()?;
            Some(self.push(NodeKind::IterationScheme { spec: spec }))
        } else {
            None
        };
        self.expect_kw(&Keyword::Loop)?;
        let sequence_of_statements = self.parse_sequence_of_statements()?;
        self.expect_kw(&Keyword::End)?;
        self.expect_kw(&Keyword::Loop)?;
        let loop_label_end = self.accept_identifier();
        self.expect_delim(&Delimiter::Terminator)?;
        Ok(self.push(NodeKind::LoopStatement {
            loop_label: label,
            iteration_scheme: iteration_scheme,
            sequence_of_statements: sequence_of_statements,
            loop_label_end: loop_label_end,
        }))
    }

    fn parse_parameter_specification(&mut self) -> Result<NodeId, VhdlError> {
        let identifier = self.expect_identifier()?;
        self.expect_kw(&Keyword::In)?;
        let discrete_range = self.parse_discrete_range()?;
        Ok(self.push(NodeKind::ParameterSpecification {
            identifier: identifier,
            discrete_range: discrete_range,
        }))
    }

    // --- concurrent statements -----------------------------------------------

    pub(super) fn parse_concurrent_statement(&mut self) -> Result<NodeId, VhdlError> {
        let label = self.parse_label_opt()?;
        let item = if self.peek_kw(&Keyword::Process) == true {
            self.parse_process_statement(label, None)?
        } else if self.peek_kw(&Keyword::Postponed) == true {
            let postponed = self.take_terminal();
            if self.peek_kw(&Keyword::Process) == true {
                self.parse_process_statement(label, Some(postponed))?
            } else if self.peek_kw(&Keyword::Assert) == true {
                let assertion = self.parse_assertion()?;
                self.expect_delim(&Delimiter::Terminator)?;
                self.push(NodeKind::ConcurrentAssertionStatement {
                    label: label,
                    postponed: Some(postponed),
                    assertion: assertion,
                })
            } else {
                self.parse_concurrent_assignment_or_call(label, Some(postponed))?
            }
        } else if self.peek_kw(&Keyword::Block) == true {
            self.parse_block_statement(label)?
        } else if self.peek_kw(&Keyword::Assert) == true {
            let assertion = self.parse_assertion()?;
            self.expect_delim(&Delimiter::Terminator)?;
            self.push(NodeKind::ConcurrentAssertionStatement {
                label: label,
                postponed: None,
                assertion: assertion,
            })
        } else if self.peek_kw(&Keyword::With) == true {
            let assignment = self.parse_selected_signal_assignment()?;
            self.push(NodeKind::ConcurrentSignalAssignmentStatement {
                label: label,
                postponed: None,
                assignment: assignment,
            })
        } else if self.peek_kw(&Keyword::For) == true {
            self.parse_for_generate_statement(label)?
        } else if self.peek_kw(&Keyword::If) == true {
            self.parse_if_generate_statement(label)?
        } else if self.peek_kw(&Keyword::Case) == true {
            self.parse_case_generate_statement(label)?
        } else if self.peek_kw(&Keyword::Component) == true
            || self.peek_kw(&Keyword::Entity) == true
            || self.peek_kw(&Keyword::Configuration) == true
        {
            self.parse_component_instantiation(label)?
        } else {
            self.parse_concurrent_assignment_or_call(label, None)?
        };
        Ok(self.push(NodeKind::ConcurrentStatement { item: item }))
    }

    fn require_label(&mut self, label: Option<NodeId>) -> Result<NodeId, VhdlError> {
        match label {
            Some(l) => Ok(l),
            None => Err(self.err_expected(&["label"])),
        }
    }

    fn parse_concurrent_assignment_or_call(
        &mut self,
        label: Option<NodeId>,
        postponed: Option<NodeId>,
    ) -> Result<NodeId, VhdlError> {
        let mark = self.mark();
        let target = self.parse_target()?;
        if self.accept_delim(&Delimiter::SigAssign) == true {
            let guarded = self.accept_kw(&Keyword::Guarded);
            let delay_mechanism = self.parse_delay_mechanism_opt()?;
            let waveform = self.parse_waveform()?;
            let assignment = if self.peek_kw(&Keyword::When) == true {
                self.advance();
                let condition = self.parse_expression()?;
                let mut pairs = vec![self.push(NodeKind::ConditionalWaveformPair {
                    waveform: waveform,
                    condition: condition,
                })];
                let mut else_waveform = None;
                while self.accept_kw(&Keyword::Else).is_some() == true {
                    let w = self.parse_waveform()?;
                    if self.accept_kw(&Keyword::When).is_some() == true {
                        let c = self.parse_expression()?;
                        pairs.push(self.push(NodeKind::ConditionalWaveformPair {
                            waveform: w,
                            condition: c,
                        }));
                    } else {
                        else_waveform = Some(w);
                        break;
                    }
                }
                let waveforms = self.push(NodeKind::ConditionalWaveforms {
                    pairs: pairs,
                    else_waveform: else_waveform,
                });
                self.push(NodeKind::ConcurrentConditionalSignalAssignment {
                    target: target,
                    guarded: guarded,
                    delay_mechanism: delay_mechanism,
                    conditional_waveforms: waveforms,
                })
            } else {
                self.push(NodeKind::ConcurrentSimpleSignalAssignment {
                    target: target,
                    guarded: guarded,
                    delay_mechanism: delay_mechanism,
                    waveform: waveform,
                })
            };
            self.expect_delim(&Delimiter::Terminator)?;
            return Ok(self.push(NodeKind::ConcurrentSignalAssignmentStatement {
                label: label,
                postponed: postponed,
                assignment: assignment,
            }));
        }
        // not an assignment: an instantiation by bare name or a procedure call
        self.reset(mark);
        let name = self.parse_name()?;
        if self.peek_kw(&Keyword::Generic) == true || self.peek_kw(&Keyword::Port) == true {
            let label = self.require_label(label)?;
            let unit = self.push(NodeKind::InstantiatedComponent {
                component_token: None,
                component_name: name,
            });
            return self.parse_instantiation_tail(label, unit);
        }
        let procedure_call = self.name_to_procedure_call(name);
        self.expect_delim(&Delimiter::Terminator)?;
        Ok(self.push(NodeKind::ConcurrentProcedureCallStatement {
            label: label,
            postponed: postponed,
            procedure_call: procedure_call,
        }))
    }

    fn parse_process_statement(
        &mut self,
        label: Option<NodeId>,
        postponed: Option<NodeId>,
    ) -> Result<NodeId, VhdlError> {
        self.enter("process_statement");
        self.expect_kw(&Keyword::Process)?;
        let process_sensitivity_list = match self.accept_delim(&Delimiter::ParenL) {
            true => {
                let mut list = Vec::new();
                if self.peek_kw(&Keyword::All) == true {
                    list.push(self.take_terminal());
                } else {
                    loop {
                        list.push(self.parse_name()?);
                        if self.accept_delim(&Delimiter::Comma) == false {
                            break;
                        }
                    }
                }
                self.expect_delim(&Delimiter::ParenR)?;
                Some(self.push(NodeKind::ProcessSensitivityList { list: list }))
            }
            false => None,
        };
        let is_token = self.accept_kw(&Keyword::Is);
        let mut process_declarative_part = Vec::new();
        while self.peek_kw(&Keyword::Begin) == false {
            if self.peek().is_eof() == true {
                return Err(self.err_expected(&["begin"]));
            }
            let item = self.parse_declaration()?;
            process_declarative_part.push(self.push(NodeKind::DeclarativeItem { item: item }));
        }
        self.expect_kw(&Keyword::Begin)?;
        let process_statement_part = self.parse_sequence_of_statements()?;
        self.expect_kw(&Keyword::End)?;
        let postponed_end = self.accept_kw(&Keyword::Postponed);
        self.expect_kw(&Keyword::Process)?;
        let process_label_end = self.accept_identifier();
        self.expect_delim(&Delimiter::Terminator)?;
        self.exit();
        Ok(self.push(NodeKind::ProcessStatement {
            process_label: label,
            postponed: postponed,
            process_sensitivity_list: process_sensitivity_list,
            is_token: is_token,
            process_declarative_part: process_declarative_part,
            process_statement_part: process_statement_part,
            postponed_end: postponed_end,
            process_label_end: process_label_end,
        }))
    }

    fn parse_block_statement(&mut self, label: Option<NodeId>) -> Result<NodeId, VhdlError> {
        self.enter("block_statement");
        let label = self.require_label(label)?;
        self.expect_kw(&Keyword::Block)?;
        let guard_condition = match self.accept_delim(&Delimiter::ParenL) {
            true => {
                let e = self.parse_expression()?;
                self.expect_delim(&Delimiter::ParenR)?;
                Some(e)
            }
            false => None,
        };
        let is_token = self.accept_kw(&Keyword::Is);

        let generic_clause = match self.peek_kw(&Keyword::Generic) == true
            && self.peek_at(1).check_keyword(&Keyword::Map) == false
        {
            true => Some(self.parse_generic_clause()?),
            false => None,
        };
        let generic_map_aspect = match self.peek_kw(&Keyword::Generic) {
            true => {
                let aspect = self.parse_generic_map_aspect()?;
                self.expect_delim(&Delimiter::Terminator)?;
                Some(aspect)
            }
            false => None,
        };
        let port_clause = match self.peek_kw(&Keyword::Port) == true
            && self.peek_at(1).check_keyword(&Keyword::Map) == false
        {
            true => Some(self.parse_port_clause()?),
            false => None,
        };
        let port_map_aspect = match self.peek_kw(&Keyword::Port) {
            true => {
                let aspect = self.parse_port_map_aspect()?;
                self.expect_delim(&Delimiter::Terminator)?;
                Some(aspect)
            }
            false => None,
        };
        let block_header = self.push(NodeKind::BlockHeader {
            generic_clause: generic_clause,
            generic_map_aspect: generic_map_aspect,
            port_clause: port_clause,
            port_map_aspect: port_map_aspect,
        });

        let mut block_declarative_part = Vec::new();
        while self.peek_kw(&Keyword::Begin) == false {
            if self.peek().is_eof() == true {
                return Err(self.err_expected(&["begin"]));
            }
            let item = self.parse_declaration()?;
            block_declarative_part.push(self.push(NodeKind::BlockDeclarativeItem { item: item }));
        }
        self.expect_kw(&Keyword::Begin)?;
        let mut block_statement_part = Vec::new();
        while self.peek_kw(&Keyword::End) == false {
            if self.peek().is_eof() == true {
                return Err(self.err_expected(&["end"]));
            }
            block_statement_part.push(self.parse_concurrent_statement()?);
        }
        self.expect_kw(&Keyword::End)?;
        self.expect_kw(&Keyword::Block)?;
        let label_end = self.accept_identifier();
        self.expect_delim(&Delimiter::Terminator)?;
        self.exit();
        Ok(self.push(NodeKind::BlockStatement {
            label: label,
            guard_condition: guard_condition,
            is_token: is_token,
            block_header: block_header,
            block_declarative_part: block_declarative_part,
            block_statement_part: block_statement_part,
            label_end: label_end,
        }))
    }

    fn parse_selected_signal_assignment(&mut self) -> Result<NodeId, VhdlError> {
        self.expect_kw(&Keyword::With)?;
        let expression = self.parse_expression()?;
        self.expect_kw(&Keyword::Select)?;
        let qmark = self.accept_delim_terminal(&Delimiter::Question);
        let target = self.parse_target()?;
        self.expect_delim(&Delimiter::SigAssign)?;
        let guarded = self.accept_kw(&Keyword::Guarded);
        let delay_mechanism = self.parse_delay_mechanism_opt()?;
        let mut selections = Vec::new();
        loop {
            let waveform = self.parse_waveform()?;
            self.expect_kw(&Keyword::When)?;
            let choices = self.parse_choices()?;
            selections.push(self.push(NodeKind::SelectedWaveformPair {
                waveform: waveform,
                choices: choices,
            }));
            if self.accept_delim(&Delimiter::Comma) == false {
                break;
            }
        }
        self.expect_delim(&Delimiter::Terminator)?;
        let selected_waveforms = self.push(NodeKind::SelectedWaveforms {
            selections: selections,
        });
        Ok(self.push(NodeKind::ConcurrentSelectedSignalAssignment {
            expression: expression,
            qmark: qmark,
            target: target,
            guarded: guarded,
            delay_mechanism: delay_mechanism,
            selected_waveforms: selected_waveforms,
        }))
    }

    fn parse_component_instantiation(&mut self, label: Option<NodeId>) -> Result<NodeId, VhdlError> {
        let label = self.require_label(label)?;
        let unit = if self.peek_kw(&Keyword::Component) == true {
            let component_token = Some(self.take_terminal());
            let component_name = self.parse_type_mark_name()?;
            self.push(NodeKind::InstantiatedComponent {
                component_token: component_token,
                component_name: component_name,
            })
        } else if self.peek_kw(&Keyword::Entity) == true {
            self.advance();
            // the name must stay clear of the optional (architecture) part
            let entity_name = self.parse_type_mark_name()?;
            let architecture_identifier = match self.accept_delim(&Delimiter::ParenL) {
                true => {
                    let id = self.expect_identifier()?;
                    self.expect_delim(&Delimiter::ParenR)?;
                    Some(id)
                }
                false => None,
            };
            self.push(NodeKind::InstantiatedEntity {
                entity_name: entity_name,
                architecture_identifier: architecture_identifier,
            })
        } else {
            self.expect_kw(&Keyword::Configuration)?;
            let configuration_name = self.parse_type_mark_name()?;
            self.push(NodeKind::InstantiatedConfiguration {
                configuration_name: configuration_name,
            })
        };
        self.parse_instantiation_tail(label, unit)
    }

    fn parse_instantiation_tail(&mut self, label: NodeId, unit: NodeId) -> Result<NodeId, VhdlError> {
        let generic_map = match self.peek_kw(&Keyword::Generic) {
            true => Some(self.parse_generic_map_aspect()?),
            false => None,
        };
        let port_map = match self.peek_kw(&Keyword::Port) {
            true => Some(self.parse_port_map_aspect()?),
            false => None,
        };
        self.expect_delim(&Delimiter::Terminator)?;
        Ok(self.push(NodeKind::ComponentInstantiationStatement {
            label: label,
            unit: unit,
            generic_map: generic_map,
            port_map: port_map,
        }))
    }

    // --- generate statements -------------------------------------------------

    fn peek_declaration_keyword(&self) -> bool {
        match self.peek().as_keyword() {
            Some(kw) => match kw {
                Keyword::Type
                | Keyword::Subtype
                | Keyword::Constant
                | Keyword::Signal
                | Keyword::Shared
                | Keyword::Variable
                | Keyword::File
                | Keyword::Alias
                | Keyword::Attribute
                | Keyword::Component
                | Keyword::Use
                | Keyword::Function
                | Keyword::Procedure
                | Keyword::Pure
                | Keyword::Impure
                | Keyword::Package => true,
                _ => false,
            },
            None => false,
        }
    }

    /// Parses a generate statement body: optional declarations closed by
    /// `begin`, then concurrent statements until a region-closing keyword.
    fn parse_generate_statement_body(&mut self) -> Result<NodeId, VhdlError> {
        let mut block_declarative_part = Vec::new();
        while self.peek_declaration_keyword() == true {
            let item = self.parse_declaration()?;
            block_declarative_part.push(self.push(NodeKind::BlockDeclarativeItem { item: item }));
        }
        let begin_token = match block_declarative_part.is_empty() {
            true => self.accept_kw(&Keyword::Begin),
            false => Some(self.expect_kw(&Keyword::Begin)?),
        };
        let mut block_statement_part = Vec::new();
        loop {
            if self.peek().is_eof() == true {
                return Err(self.err_expected(&["end"]));
            }
            if self.peek_kw(&Keyword::End) == true
                || self.peek_kw(&Keyword::Elsif) == true
                || self.peek_kw(&Keyword::Else) == true
                || self.peek_kw(&Keyword::When) == true
            {
                break;
            }
            block_statement_part.push(self.parse_concurrent_statement()?);
        }
        Ok(self.push(NodeKind::GenerateStatementBody {
            block_declarative_part: block_declarative_part,
            begin_token: begin_token,
            block_statement_part: block_statement_part,
        }))
    }

    fn parse_for_generate_statement(&mut self, label: Option<NodeId>) -> Result<NodeId, VhdlError> {
        self.enter("for_generate_statement");
        let label = self.require_label(label)?;
        self.expect_kw(&Keyword::For)?;
        let spec = self.parse_parameter_specification()?;
        self.expect_kw(&Keyword::Generate)?;
        let body = self.parse_generate_statement_body()?;
        self.expect_kw(&Keyword::End)?;
        self.expect_kw(&Keyword::Generate)?;
        let label_end = self.accept_identifier();
        self.expect_delim(&Delimiter::Terminator)?;
        self.exit();
        Ok(self.push(NodeKind::ForGenerateStatement {
            label: label,
            generate_parameter_specification: spec,
            generate_statement_body: body,
            label_end: label_end,
        }))
    }

    fn parse_if_generate_statement(&mut self, label: Option<NodeId>) -> Result<NodeId, VhdlError> {
        self.enter("if_generate_statement");
        let label = self.require_label(label)?;
        self.expect_kw(&Keyword::If)?;
        let if_label = self.parse_label_opt()?;
        let condition = self.parse_expression()?;
        self.expect_kw(&Keyword::Generate)?;
        let if_body = self.parse_generate_statement_body()?;
        let mut elsif_branches = Vec::new();
        while self.peek_kw(&Keyword::Elsif) == true {
            self.advance();
            let alternative_label = self.parse_label_opt()?;
            let branch_condition = self.parse_expression()?;
            self.expect_kw(&Keyword::Generate)?;
            let body = self.parse_generate_statement_body()?;
            elsif_branches.push(self.push(NodeKind::ElsifGenerateBranch {
                alternative_label: alternative_label,
                condition: branch_condition,
                body: body,
            }));
        }
        let (else_label, else_body) = match self.accept_kw(&Keyword::Else) {
            Some(_) => {
                let else_label = self.parse_label_opt()?;
                self.expect_kw(&Keyword::Generate)?;
                (else_label, Some(self.parse_generate_statement_body()?))
            }
            None => (None, None),
        };
        self.expect_kw(&Keyword::End)?;
        self.expect_kw(&Keyword::Generate)?;
        let label_end = self.accept_identifier();
        self.expect_delim(&Delimiter::Terminator)?;
        self.exit();
        Ok(self.push(NodeKind::IfGenerateStatement {
            label: label,
            if_label: if_label,
            condition: condition,
            if_body: if_body,
            elsif_branches: elsif_branches,
            else_label: else_label,
            else_body: else_body,
            label_end: label_end,
        }))
    }

    fn parse_case_generate_statement(&mut self, label: Option<NodeId>) -> Result<NodeId, VhdlError> {
        self.enter("case_generate_statement");
        let label = self.require_label(label)?;
        self.expect_kw(&Keyword::Case)?;
        let expression = self.parse_expression()?;
        self.expect_kw(&Keyword::Generate)?;
        let mut alternatives = Vec::new();
        while self.peek_kw(&Keyword::When) == true {
            self.advance();
            let alternative_label = self.parse_label_opt()?;
            let choices = self.parse_choices()?;
            self.expect_delim(&Delimiter::Arrow)?;
            let body = self.parse_generate_statement_body()?;
            alternatives.push(self.push(NodeKind::CaseGenerateAlternative {
                alternative_label: alternative_label,
                choices: choices,
                body: body,
            }));
        }
        self.expect_kw(&Keyword::End)?;
        self.expect_kw(&Keyword::Generate)?;
        let label_end = self.accept_identifier();
        self.expect_delim(&Delimiter::Terminator)?;
        self.exit();
        Ok(self.push(NodeKind::CaseGenerateStatement {
            label: label,
            expression: expression,
            alternatives: alternatives,
            label_end: label_end,
        }))
    }
}
