use super::CommandDef;

pub const COMMANDS: &[CommandDef] = command_table!{DataTables;
    "TB" ["lab", "matid", "ntemp", "npts", "tbopt", "", "funcname"], "Activate a data table for material properties";
    "TBCOPY" ["lab", "matf", "matt"], "Copy a data table between materials";
    "TBDATA" ["stloc", "c1", "c2", "c3", "c4", "c5", "c6"], "Define data for the active data table";
    "TBDELE" ["lab", "mat1", "mat2", "inc", "tbopt"], "Delete previously defined data tables";
    "TBEO" ["par", "value"], "Set special options or parameters for material data tables";
    "TBFIELD" ["type", "value"], "Define values of field variables for material data tables";
    "TBIN" ["oper", "par1", "par2", "par3", "par4"], "Set parameters used for interpolation of the material data tables";
    "TBLIST" ["lab", "mat"], "List the material data tables";
    "TBMODIF" ["row", "col", "value"], "Modify data for the active data table";
    "TBPLOT" ["lab", "mat", "tbopt", "temp", "segn"], "Graph the specified data table";
    "TBPT" ["oper", "x1", "x2", "x3", "", "xn"], "Define a point on a nonlinear data curve";
    "TBTEMP" ["temp", "kmod"], "Define a temperature for a data table";
    "INISTATE" ["action", "val1", "val2", "val3", "val4", "val5", "val6", "val7", "val8", "val9"], "Define initial state data";
    "CBTMP" ["temp"], "Specify a temperature for composite-beam input";
    "CGROW" ["action", "par1", "par2", "par3"], "Define crack-growth information";
};
